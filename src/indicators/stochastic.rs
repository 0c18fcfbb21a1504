// =============================================================================
// Stochastic Oscillator (slow %K / %D)
// =============================================================================
//
// For every bar with a full look-back window of `period` bars:
//   LL = lowest low,  HH = highest high
//   numerator   = close - LL
//   denominator = HH - LL
//
// Slowed %K = 100 * sum(numerators) / sum(denominators) over the last
//             `k_smooth` windows
// %D        = SMA of the last `d_smooth` %K values
//
// When every window has the same range, slowed %K equals the SMA of raw %K.
// Summing before dividing keeps a flat window from producing a 0/0 on its own;
// only a run of flat windows is degenerate.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::contract::{nonzero, validate_period, Indicator, Precision, Rounded};
use crate::error::{IndicatorError, Result};
use crate::series::WindowedSeries;
use crate::stats;
use crate::types::HighLowClose;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticOutput {
    pub k: f64,
    pub d: f64,
}

impl StochasticOutput {
    /// `[k, d]`.
    pub fn to_array(&self) -> [f64; 2] {
        [self.k, self.d]
    }
}

impl Rounded for StochasticOutput {
    fn rounded(self, precision: Precision) -> Self {
        Self {
            k: precision.apply(self.k),
            d: precision.apply(self.d),
        }
    }

    fn is_finite(&self) -> bool {
        self.k.is_finite() && self.d.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stochastic {
    pub period: usize,
    pub k_smooth: usize,
    pub d_smooth: usize,
}

impl Stochastic {
    pub fn new(period: usize, k_smooth: usize, d_smooth: usize) -> Self {
        Self {
            period,
            k_smooth,
            d_smooth,
        }
    }
}

/// `(close - LL, HH - LL)` for one look-back window.
fn window_position(window: &[HighLowClose]) -> (f64, f64) {
    let highest = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let close = window.last().map_or(lowest, |b| b.close);
    (close - lowest, highest - lowest)
}

impl Indicator for Stochastic {
    type Point = HighLowClose;
    type Output = StochasticOutput;

    fn name(&self) -> &'static str {
        "stochastic"
    }

    fn validate(&self) -> Result<()> {
        validate_period("period", self.period)?;
        validate_period("k_smooth", self.k_smooth)?;
        validate_period("d_smooth", self.d_smooth)?;
        Ok(())
    }

    fn min_len(&self) -> usize {
        self.period
            .checked_add(self.k_smooth)
            .and_then(|n| n.checked_add(self.d_smooth))
            .map_or(usize::MAX, |n| n - 2)
    }

    fn precision(&self) -> Precision {
        Precision::Round(4)
    }

    fn compute(&self, series: &WindowedSeries<'_, HighLowClose>) -> Result<StochasticOutput> {
        let needed = self.min_len();
        let tail = WindowedSeries::new(series.trailing(needed)?);

        let positions: Vec<(f64, f64)> = tail.sliding(self.period)?.map(window_position).collect();

        let slow_k = positions
            .windows(self.k_smooth)
            .map(|run| {
                let numerator: f64 = run.iter().map(|(n, _)| n).sum();
                let denominator: f64 = run.iter().map(|(_, d)| d).sum();
                nonzero(denominator, "stochastic range").map(|den| 100.0 * numerator / den)
            })
            .collect::<Result<Vec<f64>>>()?;

        let k = *slow_k.last().ok_or(IndicatorError::EmptyInput)?;
        let d = stats::mean(&slow_k[slow_k.len() - self.d_smooth..])?;
        Ok(StochasticOutput { k, d })
    }
}

pub fn calculate_stochastic(
    bars: &[HighLowClose],
    period: usize,
    k_smooth: usize,
    d_smooth: usize,
) -> Result<StochasticOutput> {
    Stochastic::new(period, k_smooth, d_smooth).evaluate(bars)
}
