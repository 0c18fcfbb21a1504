// =============================================================================
// Composite Indicators
// =============================================================================
//
// Every indicator is a small parameter struct implementing `Indicator`, plus a
// `calculate_*` convenience function.  All of them are pure: the series is
// borrowed for the call and nothing survives it.

pub mod bollinger;
pub mod cci;
pub mod cmf;
pub mod cmo;
pub mod envelopes;
pub mod imi;
pub mod macd;
pub mod mass_index;
pub mod rmi;
pub mod rsi;
pub mod stochastic;
pub mod vroc;
pub mod williams_r;

pub use bollinger::{band_width, calculate_bollinger, BollingerBands};
pub use cci::{calculate_cci, Cci};
pub use cmf::{calculate_cmf, ChaikinMoneyFlow};
pub use cmo::{calculate_cmo, Cmo};
pub use envelopes::{calculate_ema_envelopes, EmaEnvelopes};
pub use imi::{calculate_imi, Imi};
pub use macd::{calculate_macd, Macd, MacdOutput};
pub use mass_index::{calculate_mass_index, MassIndex};
pub use rmi::{calculate_rmi, Rmi};
pub use rsi::{calculate_rsi, GainLossTracks, Rsi};
pub use stochastic::{calculate_stochastic, Stochastic, StochasticOutput};
pub use vroc::{calculate_vroc, VolumeRateOfChange};
pub use williams_r::{calculate_williams_r, WilliamsR};
