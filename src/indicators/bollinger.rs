// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), where σ is the population standard deviation
// of the same trailing `period` closes.
//
// The Band Width is the normalised distance:
//   BBW = (upper - lower) / middle * 100
//
// Output is truncated (not rounded) to 3 decimals.
// =============================================================================

use crate::contract::{finite, nonzero, validate_period, Indicator, Precision};
use crate::error::{IndicatorError, Result};
use crate::series::WindowedSeries;
use crate::stats;
use crate::types::Bands;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub period: usize,
    pub multiplier: f64,
}

impl BollingerBands {
    pub fn new(period: usize, multiplier: f64) -> Self {
        Self { period, multiplier }
    }
}

impl Indicator for BollingerBands {
    type Point = f64;
    type Output = Bands;

    fn name(&self) -> &'static str {
        "bollinger_bands"
    }

    fn validate(&self) -> Result<()> {
        validate_period("period", self.period)?;
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(IndicatorError::invalid_parameter(format!(
                "bollinger multiplier must be a non-negative real, got {}",
                self.multiplier
            )));
        }
        Ok(())
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn precision(&self) -> Precision {
        Precision::Truncate(3)
    }

    fn compute(&self, series: &WindowedSeries<'_, f64>) -> Result<Bands> {
        let window = series.trailing(self.period)?;
        let middle = stats::mean(window)?;
        let spread = self.multiplier * stats::standard_deviation(window)?;
        Ok(Bands {
            upper: middle + spread,
            middle,
            lower: middle - spread,
        })
    }
}

pub fn calculate_bollinger(closes: &[f64], period: usize, multiplier: f64) -> Result<Bands> {
    BollingerBands::new(period, multiplier).evaluate(closes)
}

/// Bollinger Band Width: `(upper - lower) / middle * 100`.
pub fn band_width(bands: &Bands) -> Result<f64> {
    let middle = nonzero(bands.middle, "bollinger band width")?;
    finite((bands.upper - bands.lower) / middle * 100.0, "bollinger band width")
}
