// =============================================================================
// Relative Momentum Index (RMI)
// =============================================================================
//
// RSI computed over `momentum`-lagged differences (close_t - close_{t-momentum})
// instead of consecutive ones.  With `momentum == 1` it is exactly RSI.
// =============================================================================

use crate::contract::{validate_period, Indicator, Precision};
use crate::error::Result;
use crate::indicators::rsi::strength_index;
use crate::series::WindowedSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rmi {
    pub momentum: usize,
    pub period: usize,
}

impl Rmi {
    pub fn new(momentum: usize, period: usize) -> Self {
        Self { momentum, period }
    }
}

impl Indicator for Rmi {
    type Point = f64;
    type Output = f64;

    fn name(&self) -> &'static str {
        "rmi"
    }

    fn validate(&self) -> Result<()> {
        validate_period("momentum", self.momentum)?;
        validate_period("period", self.period)?;
        Ok(())
    }

    fn min_len(&self) -> usize {
        self.momentum.saturating_add(self.period)
    }

    fn precision(&self) -> Precision {
        Precision::Round(4)
    }

    fn compute(&self, series: &WindowedSeries<'_, f64>) -> Result<f64> {
        strength_index(series.as_slice(), self.momentum, self.period)
    }
}

pub fn calculate_rmi(closes: &[f64], momentum: usize, period: usize) -> Result<f64> {
    Rmi::new(momentum, period).evaluate(closes)
}
