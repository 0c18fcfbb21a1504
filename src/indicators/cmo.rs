// =============================================================================
// Chande Momentum Oscillator (CMO)
// =============================================================================
//
// Over the last `period` close-to-close differences:
//   Su  = sum of the up moves
//   Sd  = sum of the down-move magnitudes
//   CMO = 100 * (Su - Sd) / (Su + Sd)
//
// Bounded to [-100, 100].  A window with no movement at all is degenerate.
// =============================================================================

use crate::contract::{nonzero, validate_period, Indicator, Precision};
use crate::error::Result;
use crate::series::{lagged_differences, WindowedSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cmo {
    pub period: usize,
}

impl Cmo {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Cmo {
    type Point = f64;
    type Output = f64;

    fn name(&self) -> &'static str {
        "cmo"
    }

    fn validate(&self) -> Result<()> {
        validate_period("period", self.period).map(|_| ())
    }

    fn min_len(&self) -> usize {
        self.period.saturating_add(1)
    }

    fn precision(&self) -> Precision {
        Precision::Round(4)
    }

    fn compute(&self, series: &WindowedSeries<'_, f64>) -> Result<f64> {
        let window = series.trailing(self.min_len())?;
        let moves = lagged_differences(window, 1)?;

        let up: f64 = moves.iter().filter(|&&d| d > 0.0).sum();
        let down: f64 = moves.iter().filter(|&&d| d < 0.0).map(|d| -d).sum();

        let total = nonzero(up + down, "cmo total movement")?;
        Ok(100.0 * (up - down) / total)
    }
}

pub fn calculate_cmo(closes: &[f64], period: usize) -> Result<f64> {
    Cmo::new(period).evaluate(closes)
}
