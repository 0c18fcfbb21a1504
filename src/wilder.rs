// =============================================================================
// Wilder's Smoothing
// =============================================================================
//
// Step 1: Seed with the SMA of the first `period` values.
// Step 2: For every later value:
//            s_t = value_t * c + s_{t-1} * (1 - c),   c = round(1 / period, 4)
//
// The coefficient is quantised to 4 decimals, so for periods that do not divide
// 10_000 evenly this is not the textbook `1 / period` recurrence.  RSI and RMI
// additionally quantise every step to 4 decimals (`with_step_precision`).
//
// Exposed both as a building block and as an `Indicator` over bare values.
// =============================================================================

use crate::contract::{finite, require_len, validate_period, Indicator, Precision};
use crate::error::{IndicatorError, Result};
use crate::series::WindowedSeries;
use crate::stats;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilderSmoothing {
    period: usize,
    step_precision: Precision,
}

impl WilderSmoothing {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            step_precision: Precision::Exact,
        }
    }

    /// Quantise every recurrence step, e.g. `Precision::Round(4)` for RSI.
    pub fn with_step_precision(mut self, precision: Precision) -> Self {
        self.step_precision = precision;
        self
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// `round(1 / period, 4)`.
    pub fn coefficient(&self) -> f64 {
        Precision::Round(4).apply(1.0 / self.period as f64)
    }

    /// SMA of the first `period` values.
    pub fn seed(&self, values: &[f64]) -> Result<f64> {
        validate_period("period", self.period)?;
        require_len(self.period, values.len())?;
        stats::mean(&values[..self.period])
    }

    /// One recurrence step from `prev` given the next `value`.
    pub fn step(&self, prev: f64, value: f64) -> f64 {
        let c = self.coefficient();
        self.step_precision.apply(value * c + prev * (1.0 - c))
    }

    /// Final smoothed value after consuming all of `values`.
    pub fn smooth(&self, values: &[f64]) -> Result<f64> {
        let seed = self.seed(values)?;
        let smoothed = values[self.period..]
            .iter()
            .fold(seed, |prev, &value| self.step(prev, value));
        finite(smoothed, "wilder smoothing")
    }

    /// Every smoothed value, starting with the seed (length `len - period + 1`).
    pub fn smooth_series(&self, values: &[f64]) -> Result<Vec<f64>> {
        let seed = self.seed(values)?;
        let path: Vec<f64> = std::iter::once(seed)
            .chain(values[self.period..].iter().scan(seed, |prev, &value| {
                *prev = self.step(*prev, value);
                Some(*prev)
            }))
            .collect();
        if !path.iter().all(|&v| v.is_finite()) {
            return Err(IndicatorError::NonFiniteOutput("wilder smoothing"));
        }
        Ok(path)
    }
}

impl Indicator for WilderSmoothing {
    type Point = f64;
    type Output = f64;

    fn name(&self) -> &'static str {
        "wilder_smoothing"
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

    fn compute(&self, series: &WindowedSeries<'_, f64>) -> Result<f64> {
        self.smooth(series.as_slice())
    }
}

/// Wilder's smoothing of `values` over `period`, rounded to 4 decimals.
pub fn calculate_wilder(values: &[f64], period: usize) -> Result<f64> {
    WilderSmoothing::new(period).evaluate(values)
}
