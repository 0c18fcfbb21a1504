// =============================================================================
// Chaikin Money Flow (CMF)
// =============================================================================
//
// Over the last `period` bars:
//   multiplier_t = ((close - low) - (high - close)) / (high - low)
//   flow_t       = multiplier_t * volume_t
//   CMF          = sum(flow) / sum(volume)
//
// Ranges from -1 (closes pinned to the lows) to +1 (closes pinned to the
// highs).  Rounded to 5 decimals.
// =============================================================================

use crate::contract::{nonzero, validate_period, Indicator, Precision};
use crate::error::Result;
use crate::series::WindowedSeries;
use crate::types::HighLowCloseVolume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaikinMoneyFlow {
    pub period: usize,
}

impl ChaikinMoneyFlow {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

fn money_flow(bar: &HighLowCloseVolume) -> Result<f64> {
    let range = nonzero(bar.high - bar.low, "cmf bar range")?;
    Ok(((bar.close - bar.low) - (bar.high - bar.close)) / range * bar.volume)
}

impl Indicator for ChaikinMoneyFlow {
    type Point = HighLowCloseVolume;
    type Output = f64;

    fn name(&self) -> &'static str {
        "chaikin_money_flow"
    }

    fn validate(&self) -> Result<()> {
        validate_period("period", self.period).map(|_| ())
    }

    fn min_len(&self) -> usize {
        self.period
    }

    fn precision(&self) -> Precision {
        Precision::Round(5)
    }

    fn compute(&self, series: &WindowedSeries<'_, HighLowCloseVolume>) -> Result<f64> {
        let window = series.trailing(self.period)?;
        let flow = window.iter().map(money_flow).sum::<Result<f64>>()?;
        let volume: f64 = window.iter().map(|b| b.volume).sum();
        Ok(flow / nonzero(volume, "cmf volume")?)
    }
}

pub fn calculate_cmf(bars: &[HighLowCloseVolume], period: usize) -> Result<f64> {
    ChaikinMoneyFlow::new(period).evaluate(bars)
}
