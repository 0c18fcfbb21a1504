// =============================================================================
// Williams %R
// =============================================================================
//
// %R = (HH - close) / (HH - LL) * -100
//
// HH / LL are the highest high and lowest low of the last `period` bars.
// Ranges from 0 (close at the high) to -100 (close at the low).
// =============================================================================

use crate::contract::{nonzero, validate_period, Indicator, Precision};
use crate::error::Result;
use crate::series::WindowedSeries;
use crate::types::HighLowClose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WilliamsR {
    pub period: usize,
}

impl WilliamsR {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for WilliamsR {
    type Point = HighLowClose;
    type Output = f64;

    fn name(&self) -> &'static str {
        "williams_r"
    }

    fn validate(&self) -> Result<()> {
        validate_period("period", self.period).map(|_| ())
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn precision(&self) -> Precision {
        Precision::Round(2)
    }

    fn compute(&self, series: &WindowedSeries<'_, HighLowClose>) -> Result<f64> {
        let window = series.trailing(self.period)?;
        let highest = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        let lowest = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let close = window[window.len() - 1].close;

        let range = nonzero(highest - lowest, "williams %r range")?;
        Ok((highest - close) / range * -100.0)
    }
}

pub fn calculate_williams_r(bars: &[HighLowClose], period: usize) -> Result<f64> {
    WilliamsR::new(period).evaluate(bars)
}
