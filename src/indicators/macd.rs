// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// Step 1: Fast and slow EMA paths over the whole series, each seeded with the
//         first close (multiplier 2 / (period + 1)).
// Step 2: MACD line_t = fastEMA_t - slowEMA_t, kept from index `slow - 1`
//         onwards (once the slow EMA has seen a full period).
// Step 3: Signal    = EMA of the line over `signal` periods.
// Step 4: Histogram = line - signal.
//
// Output: [line, signal, histogram], rounded to 3 decimals.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::contract::{validate_period, Indicator, Precision, Rounded};
use crate::error::{IndicatorError, Result};
use crate::moving_average::{ema, ema_series};
use crate::series::WindowedSeries;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdOutput {
    /// `[macd, signal, histogram]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.macd, self.signal, self.histogram]
    }
}

impl Rounded for MacdOutput {
    fn rounded(self, precision: Precision) -> Self {
        Self {
            macd: precision.apply(self.macd),
            signal: precision.apply(self.signal),
            histogram: precision.apply(self.histogram),
        }
    }

    fn is_finite(&self) -> bool {
        self.macd.is_finite() && self.signal.is_finite() && self.histogram.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// MACD line for every close from index `slow - 1`.
    pub fn line_series(&self, closes: &[f64]) -> Result<Vec<f64>> {
        let fast = ema_series(closes, self.fast)?;
        let slow = ema_series(closes, self.slow)?;
        Ok(fast
            .iter()
            .zip(slow.iter())
            .skip(self.slow - 1)
            .map(|(f, s)| f - s)
            .collect())
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

impl Indicator for Macd {
    type Point = f64;
    type Output = MacdOutput;

    fn name(&self) -> &'static str {
        "macd"
    }

    fn validate(&self) -> Result<()> {
        validate_period("fast", self.fast)?;
        validate_period("slow", self.slow)?;
        validate_period("signal", self.signal)?;
        if self.fast >= self.slow {
            return Err(IndicatorError::invalid_period(
                "fast",
                self.fast,
                "must be less than slow",
            ));
        }
        if self.signal >= self.slow {
            return Err(IndicatorError::invalid_period(
                "signal",
                self.signal,
                "must be less than slow",
            ));
        }
        Ok(())
    }

    fn min_len(&self) -> usize {
        self.slow
            .checked_add(self.signal)
            .map_or(usize::MAX, |n| n - 1)
    }

    fn precision(&self) -> Precision {
        Precision::Round(3)
    }

    fn compute(&self, series: &WindowedSeries<'_, f64>) -> Result<MacdOutput> {
        let line = self.line_series(series.as_slice())?;
        let macd = *line.last().ok_or(IndicatorError::EmptyInput)?;
        let signal = ema(&line, self.signal)?;
        Ok(MacdOutput {
            macd,
            signal,
            histogram: macd - signal,
        })
    }
}

pub fn calculate_macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Result<MacdOutput> {
    Macd::new(fast, slow, signal).evaluate(closes)
}
