// =============================================================================
// Indicator Errors
// =============================================================================
//
// Every failure an indicator can report.  Validation errors are raised before
// any arithmetic runs; numeric degeneracies surface here instead of leaking
// NaN or infinity into a result.
// =============================================================================

use thiserror::Error;

/// Errors produced by the primitives and the composite indicators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// A period parameter is zero or inconsistent with another period.
    #[error("invalid period: {name} = {value} ({reason})")]
    InvalidPeriod {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// A non-period parameter (multiplier, percentage) is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The series is shorter than the computation needs.
    #[error("insufficient data: need {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A statistic was requested over an empty sequence.
    #[error("empty input")]
    EmptyInput,

    /// The series contains a NaN or infinite field.
    #[error("non-finite value at index {index}")]
    NonFiniteInput { index: usize },

    /// A denominator evaluated to zero.
    #[error("degenerate denominator in {0}")]
    DivisionDegeneracy(&'static str),

    /// Finite input overflowed to NaN or infinity during the computation.
    #[error("non-finite result in {0}")]
    NonFiniteOutput(&'static str),
}

impl IndicatorError {
    pub fn invalid_period(name: &'static str, value: usize, reason: &'static str) -> Self {
        Self::InvalidPeriod {
            name,
            value,
            reason,
        }
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, IndicatorError>;
