// =============================================================================
// Volume Rate of Change (VROC)
// =============================================================================
//
// VROC = (volume_t - volume_{t-period}) / volume_{t-period} * 100
// =============================================================================

use crate::contract::{nonzero, validate_period, Indicator, Precision};
use crate::error::Result;
use crate::series::WindowedSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeRateOfChange {
    pub period: usize,
}

impl VolumeRateOfChange {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for VolumeRateOfChange {
    type Point = f64;
    type Output = f64;

    fn name(&self) -> &'static str {
        "volume_rate_of_change"
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
        let base = nonzero(window[0], "vroc base volume")?;
        Ok((window[self.period] - base) / base * 100.0)
    }
}

pub fn calculate_vroc(volumes: &[f64], period: usize) -> Result<f64> {
    VolumeRateOfChange::new(period).evaluate(volumes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    fn volumes() -> Vec<f64> {
        vec![9996.0, 12940.0, 37524.0, 21032.0, 14880.0, 21304.0]
    }

    #[test]
    fn vroc_reference_values() {
        assert_eq!(calculate_vroc(&volumes(), 5).unwrap(), 113.1253);

        let mut v = volumes();
        v.push(15776.0);
        assert_eq!(calculate_vroc(&v, 5).unwrap(), 21.9165);
    }

    #[test]
    fn vroc_window_boundary() {
        assert_eq!(
            calculate_vroc(&volumes()[..5], 5),
            Err(IndicatorError::InsufficientData {
                required: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn vroc_huge_period_is_insufficient_data() {
        assert_eq!(
            calculate_vroc(&volumes(), usize::MAX),
            Err(IndicatorError::InsufficientData {
                required: usize::MAX,
                actual: 6
            })
        );
    }

    #[test]
    fn vroc_zero_base_is_degenerate() {
        assert!(matches!(
            calculate_vroc(&[0.0, 10.0], 1),
            Err(IndicatorError::DivisionDegeneracy(_))
        ));
    }
}
