// =============================================================================
// Relative Strength Index (RSI): Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1: Compute lagged differences across the whole series, each rounded to
//         4 decimals.
// Step 2: Split them into a gains track (positive differences, else 0) and a
//         losses track (magnitude of negative differences, else 0).
// Step 3: Smooth each track with Wilder's smoothing, quantising every step to
//         4 decimals.
// Step 4: RS  = up / down
//         RSI = 100 - 100 / (RS + 1)
//
// Degenerate tracks follow the usual convention: no losses => 100, no movement
// at all => 50.
//
// RSI uses a lag of 1.  RMI (see `rmi.rs`) is the same computation with a
// configurable momentum lag.
// =============================================================================

use crate::contract::{validate_period, Indicator, Precision};
use crate::error::Result;
use crate::series::{lagged_differences, WindowedSeries};
use crate::wilder::WilderSmoothing;

/// Gains and losses split out of a difference series.
#[derive(Debug, Clone, PartialEq)]
pub struct GainLossTracks {
    pub gains: Vec<f64>,
    pub losses: Vec<f64>,
}

impl GainLossTracks {
    pub fn from_differences(differences: &[f64]) -> Self {
        let (gains, losses) = differences
            .iter()
            .map(|&d| {
                if d > 0.0 {
                    (d, 0.0)
                } else if d < 0.0 {
                    (0.0, -d)
                } else {
                    (0.0, 0.0)
                }
            })
            .unzip();
        Self { gains, losses }
    }

    /// Wilder-smoothed `(up, down)` pair.
    pub fn smoothed(&self, smoothing: &WilderSmoothing) -> Result<(f64, f64)> {
        Ok((smoothing.smooth(&self.gains)?, smoothing.smooth(&self.losses)?))
    }
}

/// Shared RSI/RMI core: unrounded index over `lag`-differences smoothed over
/// `period`.  Needs `closes.len() >= lag + period`.
pub(crate) fn strength_index(closes: &[f64], lag: usize, period: usize) -> Result<f64> {
    let quantise = Precision::Round(4);
    let differences: Vec<f64> = lagged_differences(closes, lag)?
        .into_iter()
        .map(|d| quantise.apply(d))
        .collect();

    let tracks = GainLossTracks::from_differences(&differences);
    let smoothing = WilderSmoothing::new(period).with_step_precision(quantise);
    let (up, down) = tracks.smoothed(&smoothing)?;
    Ok(index_from_averages(up, down))
}

/// `100 - 100 / (up / down + 1)`, saturating on a zero `down`.
fn index_from_averages(up: f64, down: f64) -> f64 {
    if down == 0.0 && up == 0.0 {
        50.0
    } else if down == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (up / down + 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rsi {
    pub period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Rsi {
    type Point = f64;
    type Output = f64;

    fn name(&self) -> &'static str {
        "rsi"
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
        strength_index(series.as_slice(), 1, self.period)
    }
}

/// RSI of `closes` over `period`, rounded to 4 decimals.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Result<f64> {
    Rsi::new(period).evaluate(closes)
}
