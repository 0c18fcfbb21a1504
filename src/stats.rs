// =============================================================================
// Statistical Methods
// =============================================================================
//
// Population statistics (divide by N, not N-1) over a slice of reals.
// =============================================================================

use crate::contract::finite;
use crate::error::{IndicatorError, Result};

pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }
    finite(values.iter().sum::<f64>() / values.len() as f64, "mean")
}

/// Population variance: mean of squared deviations from the mean.
pub fn variance(values: &[f64]) -> Result<f64> {
    let m = mean(values)?;
    let squared = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    finite(squared / values.len() as f64, "variance")
}

pub fn standard_deviation(values: &[f64]) -> Result<f64> {
    variance(values).map(f64::sqrt)
}

/// Mean absolute deviation around the mean.
pub fn mean_absolute_deviation(values: &[f64]) -> Result<f64> {
    let m = mean(values)?;
    let spread = values.iter().map(|v| (v - m).abs()).sum::<f64>() / values.len() as f64;
    finite(spread, "mean absolute deviation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Precision;

    fn trunc5(v: f64) -> f64 {
        Precision::Truncate(5).apply(v)
    }

    #[test]
    fn mean_of_sequence() {
        assert_eq!(mean(&[0.0, 1.0, 2.0, 3.0]).unwrap(), 1.5);
    }

    #[test]
    fn variance_and_std() {
        assert_eq!(variance(&[0.0, 1.0, 2.0, 3.0]).unwrap(), 1.25);
        assert_eq!(trunc5(standard_deviation(&[0.0, 1.0, 2.0, 3.0]).unwrap()), 1.11803);

        assert_eq!(variance(&[-1.0, 1.0, 2.0, -2.0]).unwrap(), 2.5);
        assert_eq!(trunc5(standard_deviation(&[-1.0, 1.0, 2.0, -2.0]).unwrap()), 1.58113);
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_eq!(variance(&[0.0]).unwrap(), 0.0);
        assert_eq!(standard_deviation(&[7.5]).unwrap(), 0.0);
    }

    #[test]
    fn constant_sequence() {
        let v = [4.2; 8];
        assert!((mean(&v).unwrap() - 4.2).abs() < 1e-12);
        assert!(variance(&v).unwrap().abs() < 1e-12);
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(mean(&[]), Err(IndicatorError::EmptyInput));
        assert_eq!(variance(&[]), Err(IndicatorError::EmptyInput));
        assert_eq!(standard_deviation(&[]), Err(IndicatorError::EmptyInput));
    }

    #[test]
    fn overflowing_sums_rejected() {
        assert_eq!(mean(&[1e308; 3]), Err(IndicatorError::NonFiniteOutput("mean")));
        // Mean is finite, the squared deviations are not.
        assert_eq!(
            variance(&[-1e200, 1e200]),
            Err(IndicatorError::NonFiniteOutput("variance"))
        );
        assert!(standard_deviation(&[-1e200, 1e200]).is_err());
    }

    #[test]
    fn mean_absolute_deviation_symmetric() {
        assert_eq!(mean_absolute_deviation(&[1.0, 3.0]).unwrap(), 1.0);
    }
}
