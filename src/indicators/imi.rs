// =============================================================================
// Intraday Momentum Index (IMI)
// =============================================================================
//
// RSI-like oscillator built from the open-to-close body of each bar rather
// than close-to-close changes.  Over the last `period` bars:
//   G   = sum(close - open) on up bars   (close > open)
//   L   = sum(open - close) on down bars (close < open)
//   IMI = 100 * G / (G + L)
// =============================================================================

use crate::contract::{nonzero, validate_period, Indicator, Precision};
use crate::error::Result;
use crate::series::WindowedSeries;
use crate::types::OpenClose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Imi {
    pub period: usize,
}

impl Imi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Imi {
    type Point = OpenClose;
    type Output = f64;

    fn name(&self) -> &'static str {
        "imi"
    }

    fn validate(&self) -> Result<()> {
        validate_period("period", self.period).map(|_| ())
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn precision(&self) -> Precision {
        Precision::Round(4)
    }

    fn compute(&self, series: &WindowedSeries<'_, OpenClose>) -> Result<f64> {
        let window = series.trailing(self.period)?;

        let (gains, losses) = window.iter().fold((0.0_f64, 0.0_f64), |(g, l), bar| {
            if bar.close > bar.open {
                (g + (bar.close - bar.open), l)
            } else if bar.close < bar.open {
                (g, l + (bar.open - bar.close))
            } else {
                (g, l)
            }
        });

        let total = nonzero(gains + losses, "imi intraday movement")?;
        Ok(100.0 * gains / total)
    }
}

pub fn calculate_imi(bars: &[OpenClose], period: usize) -> Result<f64> {
    Imi::new(period).evaluate(bars)
}
