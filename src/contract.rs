// =============================================================================
// Indicator Contract: validation, windowing requirements, rounding policy
// =============================================================================
//
// Every composite indicator is a small `Copy` value holding its parameters and
// implementing `Indicator`.  `Indicator::evaluate` is the only entry point
// callers need:
//
//   1. validate parameters          -> InvalidPeriod / InvalidParameter
//   2. check the series length      -> InsufficientData
//   3. reject NaN / infinite input  -> NonFiniteInput
//   4. compute                      -> DivisionDegeneracy on zero denominators
//   5. apply the declared precision once, to the final output
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{IndicatorError, Result};
use crate::series::WindowedSeries;
use crate::types::PricePoint;

/// Output rounding policy declared by each indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    /// No rounding.
    Exact,
    /// Round half away from zero to `n` decimal places.
    Round(u32),
    /// Truncate toward zero at `n` decimal places.
    Truncate(u32),
}

impl Precision {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Exact => value,
            Self::Round(places) => Self::scaled(value, places, f64::round),
            Self::Truncate(places) => Self::scaled(value, places, f64::trunc),
        }
    }

    // Magnitudes that overflow when scaled carry no fractional digits anyway.
    fn scaled(value: f64, places: u32, cut: fn(f64) -> f64) -> f64 {
        let factor = 10f64.powi(places as i32);
        let shifted = value * factor;
        if !shifted.is_finite() {
            return value;
        }
        cut(shifted) / factor
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::Round(4)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Round(n) => write!(f, "round({n})"),
            Self::Truncate(n) => write!(f, "truncate({n})"),
        }
    }
}

/// Applies a `Precision` to every scalar of an indicator output.
pub trait Rounded {
    fn rounded(self, precision: Precision) -> Self;

    /// `true` when every scalar is a finite real number.
    fn is_finite(&self) -> bool;
}

impl Rounded for f64 {
    fn rounded(self, precision: Precision) -> Self {
        precision.apply(self)
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

/// Capability interface implemented by every indicator.
pub trait Indicator {
    /// Shape of one element of the input series.
    type Point: PricePoint;
    /// Scalar or fixed-size tuple produced by the indicator.
    type Output: Rounded + std::fmt::Debug;

    fn name(&self) -> &'static str;

    /// Check the parameters; runs before anything touches the series.
    fn validate(&self) -> Result<()>;

    /// Minimum number of points the computation needs.
    fn min_len(&self) -> usize;

    fn precision(&self) -> Precision;

    /// Raw (unrounded) computation.  Only called by `evaluate`, after
    /// validation, so implementations may assume valid parameters and at
    /// least `min_len()` finite points.
    fn compute(&self, series: &WindowedSeries<'_, Self::Point>) -> Result<Self::Output>;

    /// Validate, compute, and round.
    fn evaluate(&self, series: &[Self::Point]) -> Result<Self::Output> {
        let outcome = self
            .validate()
            .and_then(|()| require_len(self.min_len(), series.len()))
            .and_then(|()| ensure_finite(series))
            .and_then(|()| self.compute(&WindowedSeries::new(series)))
            .and_then(|raw| {
                if raw.is_finite() {
                    Ok(raw)
                } else {
                    Err(IndicatorError::NonFiniteOutput(self.name()))
                }
            });

        match outcome {
            Ok(raw) => {
                let output = raw.rounded(self.precision());
                debug!(indicator = self.name(), len = series.len(), "indicator evaluated");
                trace!(indicator = self.name(), output = ?output, precision = %self.precision());
                Ok(output)
            }
            Err(e) => {
                debug!(indicator = self.name(), len = series.len(), error = %e, "indicator rejected");
                Err(e)
            }
        }
    }
}

/// Reject a zero period.  Returns the period for chaining.
pub fn validate_period(name: &'static str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(IndicatorError::invalid_period(name, value, "must be at least 1"));
    }
    Ok(value)
}

/// Fail with `InsufficientData` when `actual < required`.
pub fn require_len(required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(IndicatorError::InsufficientData { required, actual });
    }
    Ok(())
}

/// Fail on the first point with a NaN or infinite field.
pub fn ensure_finite<P: PricePoint>(series: &[P]) -> Result<()> {
    match series.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(IndicatorError::NonFiniteInput { index }),
        None => Ok(()),
    }
}

/// Turn an overflowed intermediate into `NonFiniteOutput`.
pub(crate) fn finite(value: f64, context: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(IndicatorError::NonFiniteOutput(context));
    }
    Ok(value)
}

/// Turn a zero denominator into `DivisionDegeneracy`.
pub(crate) fn nonzero(denominator: f64, context: &'static str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(IndicatorError::DivisionDegeneracy(context));
    }
    Ok(denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(Precision::Round(2).apply(1.005_000_1), 1.01);
        assert_eq!(Precision::Round(4).apply(76.666_666_7), 76.6667);
        assert_eq!(Precision::Round(3).apply(-1.933_762), -1.934);
    }

    #[test]
    fn truncate_toward_zero() {
        assert_eq!(Precision::Truncate(3).apply(32.397_91), 32.397);
        assert_eq!(Precision::Truncate(3).apply(-0.123_9), -0.123);
    }

    #[test]
    fn huge_values_pass_through_unscaled() {
        assert_eq!(Precision::Round(4).apply(1e308), 1e308);
        assert_eq!(Precision::Truncate(3).apply(-1e307), -1e307);
    }

    #[test]
    fn overflowing_output_rejected() {
        struct Doubler;

        impl Indicator for Doubler {
            type Point = f64;
            type Output = f64;

            fn name(&self) -> &'static str {
                "doubler"
            }
            fn validate(&self) -> Result<()> {
                Ok(())
            }
            fn min_len(&self) -> usize {
                1
            }
            fn precision(&self) -> Precision {
                Precision::Round(4)
            }
            fn compute(&self, series: &WindowedSeries<'_, f64>) -> Result<f64> {
                Ok(series.as_slice().iter().sum::<f64>() * 2.0)
            }
        }

        assert_eq!(Doubler.evaluate(&[1.5]), Ok(3.0));
        assert_eq!(
            Doubler.evaluate(&[1e308, 1e308]),
            Err(IndicatorError::NonFiniteOutput("doubler"))
        );
    }

    #[test]
    fn finite_guard() {
        assert_eq!(finite(2.0, "test"), Ok(2.0));
        assert_eq!(finite(f64::INFINITY, "test"), Err(IndicatorError::NonFiniteOutput("test")));
        assert!(finite(f64::NAN, "test").is_err());
    }

    #[test]
    fn exact_is_identity() {
        let v = 1.0 / 3.0;
        assert_eq!(Precision::Exact.apply(v), v);
    }

    #[test]
    fn zero_period_rejected() {
        assert!(matches!(
            validate_period("period", 0),
            Err(IndicatorError::InvalidPeriod { value: 0, .. })
        ));
        assert_eq!(validate_period("period", 5), Ok(5));
    }

    #[test]
    fn require_len_boundary() {
        assert!(require_len(6, 6).is_ok());
        assert_eq!(
            require_len(6, 5),
            Err(IndicatorError::InsufficientData {
                required: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn non_finite_index_reported() {
        let series = [1.0, 2.0, f64::NAN, 4.0];
        assert_eq!(
            ensure_finite(&series),
            Err(IndicatorError::NonFiniteInput { index: 2 })
        );
    }

    #[test]
    fn nonzero_guard() {
        assert!(nonzero(0.0, "test").is_err());
        assert_eq!(nonzero(2.5, "test"), Ok(2.5));
    }

    #[test]
    fn precision_display() {
        assert_eq!(Precision::Truncate(3).to_string(), "truncate(3)");
    }
}
