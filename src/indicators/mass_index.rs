// =============================================================================
// Mass Index
// =============================================================================
//
// Detects range expansion (reversal bulges) from the high-low spread.
//
// Step 1: Take the trailing `2 * period + 1` bars; range_t = high_t - low_t.
// Step 2: Single EMA:  exponential fold of the ranges (multiplier
//         2 / (period + 1), every step rounded to 4 decimals), discarding the
//         first `period - 1` warm-up values.
// Step 3: Double EMA:  the same fold over the single EMA, again discarding the
//         first `period - 1` values.
// Step 4: Mass Index = sum over the aligned tail of
//            round(singleEMA_t / doubleEMA_t, 4)
// =============================================================================

use crate::contract::{nonzero, validate_period, Indicator, Precision};
use crate::error::Result;
use crate::moving_average::{ema_smoothing_factor, exponential_fold_with};
use crate::series::WindowedSeries;
use crate::types::HighLow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MassIndex {
    pub period: usize,
}

impl MassIndex {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for MassIndex {
    type Point = HighLow;
    type Output = f64;

    fn name(&self) -> &'static str {
        "mass_index"
    }

    fn validate(&self) -> Result<()> {
        validate_period("period", self.period).map(|_| ())
    }

    fn min_len(&self) -> usize {
        self.period.saturating_mul(2).saturating_add(1)
    }

    fn precision(&self) -> Precision {
        Precision::Round(4)
    }

    fn compute(&self, series: &WindowedSeries<'_, HighLow>) -> Result<f64> {
        let step = Precision::Round(4);
        let alpha = ema_smoothing_factor(self.period);
        let warm_up = self.period - 1;

        let window = WindowedSeries::new(series.trailing(self.min_len())?);
        let ranges = window.column(HighLow::range);

        let single: Vec<f64> = exponential_fold_with(&ranges, alpha, step)
            .into_iter()
            .skip(warm_up)
            .collect();
        let double: Vec<f64> = exponential_fold_with(&single, alpha, step)
            .into_iter()
            .skip(warm_up)
            .collect();

        let aligned = &single[single.len() - double.len()..];
        aligned
            .iter()
            .zip(double.iter())
            .map(|(s, d)| nonzero(*d, "mass index double ema").map(|d| step.apply(s / d)))
            .sum()
    }
}

pub fn calculate_mass_index(bars: &[HighLow], period: usize) -> Result<f64> {
    MassIndex::new(period).evaluate(bars)
}
