// =============================================================================
// Aurora TA: Technical-analysis indicator substrate
// =============================================================================
//
// Pure indicator evaluation over in-memory price series (oldest first).
//
//   series / stats / moving_average / wilder   shared building blocks
//   contract                                   `Indicator` trait + rounding
//   indicators                                 composite indicators
//   config / telemetry                         parameters from JSON, tracing
//
// Nothing here keeps state between calls.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
pub mod config;
pub mod contract;
pub mod error;
pub mod indicators;
pub mod moving_average;
pub mod series;
pub mod stats;
pub mod telemetry;
pub mod types;
pub mod wilder;

pub use config::IndicatorConfig;
pub use contract::{Indicator, Precision, Rounded};
pub use error::{IndicatorError, Result};
pub use moving_average::MovingAverage;
pub use series::WindowedSeries;
pub use types::{Bands, HighLow, HighLowClose, HighLowCloseVolume, OpenClose, PricePoint};
pub use wilder::WilderSmoothing;
