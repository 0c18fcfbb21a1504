// =============================================================================
// Price point shapes shared across the indicators
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::contract::{Precision, Rounded};

/// A single observation in a series.  Bare `f64` covers closes and volumes.
pub trait PricePoint {
    /// `true` when every field is a finite real number.
    fn is_finite(&self) -> bool;
}

impl PricePoint for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

/// High/low pair, e.g. for Mass Index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLow {
    pub high: f64,
    pub low: f64,
}

impl HighLow {
    pub fn new(high: f64, low: f64) -> Self {
        Self { high, low }
    }

    /// Bar range `high - low`.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

impl PricePoint for HighLow {
    fn is_finite(&self) -> bool {
        self.high.is_finite() && self.low.is_finite()
    }
}

impl From<(f64, f64)> for HighLow {
    fn from((high, low): (f64, f64)) -> Self {
        Self { high, low }
    }
}

/// Open/close pair, e.g. for the Intraday Momentum Index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenClose {
    pub open: f64,
    pub close: f64,
}

impl OpenClose {
    pub fn new(open: f64, close: f64) -> Self {
        Self { open, close }
    }

    /// Intraday body `close - open`; positive on an up bar.
    pub fn body(&self) -> f64 {
        self.close - self.open
    }
}

impl PricePoint for OpenClose {
    fn is_finite(&self) -> bool {
        self.open.is_finite() && self.close.is_finite()
    }
}

impl From<(f64, f64)> for OpenClose {
    fn from((open, close): (f64, f64)) -> Self {
        Self { open, close }
    }
}

/// High/low/close triple used by the oscillators (Stochastic, CCI, %R).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLowClose {
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl HighLowClose {
    pub fn new(high: f64, low: f64, close: f64) -> Self {
        Self { high, low, close }
    }

    /// Typical price `(high + low + close) / 3`.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

impl PricePoint for HighLowClose {
    fn is_finite(&self) -> bool {
        self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }
}

impl From<(f64, f64, f64)> for HighLowClose {
    fn from((high, low, close): (f64, f64, f64)) -> Self {
        Self { high, low, close }
    }
}

/// High/low/close/volume quadruple used by Chaikin Money Flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLowCloseVolume {
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl HighLowCloseVolume {
    pub fn new(high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            high,
            low,
            close,
            volume,
        }
    }
}

impl PricePoint for HighLowCloseVolume {
    fn is_finite(&self) -> bool {
        self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

impl From<(f64, f64, f64, f64)> for HighLowCloseVolume {
    fn from((high, low, close, volume): (f64, f64, f64, f64)) -> Self {
        Self {
            high,
            low,
            close,
            volume,
        }
    }
}

/// Upper/middle/lower triple returned by band and envelope indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl Bands {
    /// `[upper, middle, lower]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.upper, self.middle, self.lower]
    }
}

impl Rounded for Bands {
    fn rounded(self, precision: Precision) -> Self {
        Self {
            upper: precision.apply(self.upper),
            middle: precision.apply(self.middle),
            lower: precision.apply(self.lower),
        }
    }

    fn is_finite(&self) -> bool {
        self.upper.is_finite() && self.middle.is_finite() && self.lower.is_finite()
    }
}
