// =============================================================================
// Moving Averages: SMA, EMA, WMA
// =============================================================================
//
// All three return the average as of the last value of `values`.
//
// Formulas:
//   SMA = sum(last `period` values) / period
//   EMA:  multiplier k = 2 / (period + 1)
//         EMA_t = value_t * k + EMA_{t-1} * (1 - k)
//         folded left to right over the last `period` values, seeded with the
//         oldest value of that window
//   WMA = sum(w_i * value_i) / (period * (period + 1) / 2),  w_i = 1..=period
//
// `period == 1` reduces every variant to the last value.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::contract::{finite, require_len, validate_period, Precision};
use crate::error::Result;
use crate::stats;

/// Simple moving average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Result<f64> {
    let window = trailing_window(values, period)?;
    stats::mean(window)
}

/// Exponential moving average of the last `period` values.
pub fn ema(values: &[f64], period: usize) -> Result<f64> {
    let window = trailing_window(values, period)?;
    let k = ema_smoothing_factor(period);
    let value = window[1..]
        .iter()
        .fold(window[0], |prev, &value| value * k + prev * (1.0 - k));
    finite(value, "ema")
}

/// Linearly weighted moving average of the last `period` values; the newest
/// value carries weight `period`.
pub fn wma(values: &[f64], period: usize) -> Result<f64> {
    let window = trailing_window(values, period)?;
    let weighted: f64 = window
        .iter()
        .enumerate()
        .map(|(i, v)| (i + 1) as f64 * v)
        .sum();
    let divisor = period as f64 * (period as f64 + 1.0) / 2.0;
    finite(weighted / divisor, "wma")
}

/// `2 / (period + 1)`.
pub fn ema_smoothing_factor(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Full EMA path over `values`, seeded with the first value.
///
/// Output has the same length as the input; element `i` is the EMA as of
/// `values[i]`.
pub fn ema_series(values: &[f64], period: usize) -> Result<Vec<f64>> {
    validate_period("period", period)?;
    Ok(exponential_fold(values, ema_smoothing_factor(period)))
}

/// Exponential recurrence `s_t = x_t * alpha + s_{t-1} * (1 - alpha)` seeded
/// with `values[0]`, returning every intermediate value.
pub fn exponential_fold(values: &[f64], alpha: f64) -> Vec<f64> {
    exponential_fold_with(values, alpha, Precision::Exact)
}

/// Same as `exponential_fold`, quantising each recurrence step with `step`.
/// The seed is kept as given.
pub fn exponential_fold_with(values: &[f64], alpha: f64, step: Precision) -> Vec<f64> {
    let Some((&seed, rest)) = values.split_first() else {
        return Vec::new();
    };
    std::iter::once(seed)
        .chain(rest.iter().scan(seed, |prev, &value| {
            *prev = step.apply(value * alpha + *prev * (1.0 - alpha));
            Some(*prev)
        }))
        .collect()
}

fn trailing_window(values: &[f64], period: usize) -> Result<&[f64]> {
    validate_period("period", period)?;
    require_len(period, values.len())?;
    Ok(&values[values.len() - period..])
}

/// Moving-average family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovingAverage {
    #[default]
    Simple,
    Exponential,
    Weighted,
}

impl MovingAverage {
    pub fn apply(self, values: &[f64], period: usize) -> Result<f64> {
        match self {
            Self::Simple => sma(values, period),
            Self::Exponential => ema(values, period),
            Self::Weighted => wma(values, period),
        }
    }
}
