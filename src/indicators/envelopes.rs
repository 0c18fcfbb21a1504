// =============================================================================
// Moving Average Envelopes (EMA)
// =============================================================================
//
// A fixed-percentage channel around the EMA:
//   middle = EMA(period)
//   upper  = middle * (1 + percent / 100)
//   lower  = middle * (1 - percent / 100)
//
// Output is truncated to 3 decimals.
// =============================================================================

use crate::contract::{validate_period, Indicator, Precision};
use crate::error::{IndicatorError, Result};
use crate::moving_average::ema;
use crate::series::WindowedSeries;
use crate::types::Bands;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmaEnvelopes {
    pub period: usize,
    pub percent: f64,
}

impl EmaEnvelopes {
    pub fn new(period: usize, percent: f64) -> Self {
        Self { period, percent }
    }
}

impl Indicator for EmaEnvelopes {
    type Point = f64;
    type Output = Bands;

    fn name(&self) -> &'static str {
        "ema_envelopes"
    }

    fn validate(&self) -> Result<()> {
        validate_period("period", self.period)?;
        if !(0.0..100.0).contains(&self.percent) {
            return Err(IndicatorError::invalid_parameter(format!(
                "envelope percent must be in [0, 100), got {}",
                self.percent
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
        let middle = ema(series.as_slice(), self.period)?;
        let shift = self.percent / 100.0;
        Ok(Bands {
            upper: middle * (1.0 + shift),
            middle,
            lower: middle * (1.0 - shift),
        })
    }
}

pub fn calculate_ema_envelopes(closes: &[f64], period: usize, percent: f64) -> Result<Bands> {
    EmaEnvelopes::new(period, percent).evaluate(closes)
}
