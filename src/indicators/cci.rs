// =============================================================================
// Commodity Channel Index (CCI)
// =============================================================================
//
// Over the last `period` bars:
//   TP  = (high + low + close) / 3          typical price
//   M   = SMA(TP)
//   MD  = mean(|TP - M|)                    mean absolute deviation
//   CCI = (TP_last - M) / (0.015 * MD)
//
// The 0.015 constant scales roughly 70-80% of values into [-100, 100].
// =============================================================================

use crate::contract::{nonzero, validate_period, Indicator, Precision};
use crate::error::Result;
use crate::series::WindowedSeries;
use crate::stats;
use crate::types::HighLowClose;

const LAMBERT_CONSTANT: f64 = 0.015;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cci {
    pub period: usize,
}

impl Cci {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Cci {
    type Point = HighLowClose;
    type Output = f64;

    fn name(&self) -> &'static str {
        "cci"
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

    fn compute(&self, series: &WindowedSeries<'_, HighLowClose>) -> Result<f64> {
        let window = WindowedSeries::new(series.trailing(self.period)?);
        let typical = window.column(HighLowClose::typical_price);

        let m = stats::mean(&typical)?;
        let md = stats::mean_absolute_deviation(&typical)?;
        let last = typical[typical.len() - 1];

        let scaled = nonzero(LAMBERT_CONSTANT * md, "cci mean deviation")?;
        Ok((last - m) / scaled)
    }
}

pub fn calculate_cci(bars: &[HighLowClose], period: usize) -> Result<f64> {
    Cci::new(period).evaluate(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    fn bars() -> Vec<HighLowClose> {
        [
            (15.1250, 14.9360, 14.9360),
            (15.0520, 14.6267, 14.7520),
            (14.8173, 14.5557, 14.5857),
            (14.6900, 14.4600, 14.6000),
            (14.7967, 14.5483, 14.6983),
            (14.7940, 13.9347, 13.9460),
            (14.0930, 13.8223, 13.9827),
            (14.7000, 14.0200, 14.4500),
            (14.5255, 14.2652, 14.3452),
            (14.6579, 14.3773, 14.4197),
        ]
        .into_iter()
        .map(HighLowClose::from)
        .collect()
    }

    #[test]
    fn cci_reference_values() {
        assert_eq!(calculate_cci(&bars()[..9], 5).unwrap(), 18.089);
        assert_eq!(calculate_cci(&bars(), 5).unwrap(), 84.4605);
    }

    #[test]
    fn cci_insufficient_data() {
        assert!(matches!(
            calculate_cci(&bars()[..4], 5),
            Err(IndicatorError::InsufficientData { .. })
        ));
    }

    #[test]
    fn cci_flat_is_degenerate() {
        let bars = vec![HighLowClose::new(2.0, 2.0, 2.0); 5];
        assert!(matches!(
            calculate_cci(&bars, 5),
            Err(IndicatorError::DivisionDegeneracy(_))
        ));
    }
}
