// =============================================================================
// Indicator Configuration: default periods and parameters
// =============================================================================
//
// One place for every indicator parameter, loadable from JSON.  All fields
// carry `#[serde(default = ...)]` so a partial file (or `{}`) yields the
// conventional textbook parameters for everything it does not mention.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::contract::Indicator;
use crate::error::Result as IndicatorResult;
use crate::indicators::{
    BollingerBands, Cci, ChaikinMoneyFlow, Cmo, EmaEnvelopes, Imi, Macd, MassIndex, Rmi, Rsi,
    Stochastic, VolumeRateOfChange, WilliamsR,
};
use crate::wilder::WilderSmoothing;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_period_14() -> usize {
    14
}

fn default_period_20() -> usize {
    20
}

fn default_rmi_momentum() -> usize {
    5
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_stochastic_smooth() -> usize {
    3
}

fn default_bollinger_multiplier() -> f64 {
    2.0
}

fn default_mass_index_period() -> usize {
    9
}

fn default_envelope_percent() -> f64 {
    5.0
}

// =============================================================================
// Per-indicator parameter blocks
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodParams {
    #[serde(default = "default_period_14")]
    pub period: usize,
}

impl Default for PeriodParams {
    fn default() -> Self {
        Self {
            period: default_period_14(),
        }
    }
}

/// Same as `PeriodParams`, defaulting to 20 bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongPeriodParams {
    #[serde(default = "default_period_20")]
    pub period: usize,
}

impl Default for LongPeriodParams {
    fn default() -> Self {
        Self {
            period: default_period_20(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RmiParams {
    #[serde(default = "default_rmi_momentum")]
    pub momentum: usize,
    #[serde(default = "default_period_14")]
    pub period: usize,
}

impl Default for RmiParams {
    fn default() -> Self {
        Self {
            momentum: default_rmi_momentum(),
            period: default_period_14(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdParams {
    #[serde(default = "default_macd_fast")]
    pub fast: usize,
    #[serde(default = "default_macd_slow")]
    pub slow: usize,
    #[serde(default = "default_macd_signal")]
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: default_macd_fast(),
            slow: default_macd_slow(),
            signal: default_macd_signal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticParams {
    #[serde(default = "default_period_14")]
    pub period: usize,
    /// %K slowing.
    #[serde(default = "default_stochastic_smooth")]
    pub k_smooth: usize,
    /// %D averaging.
    #[serde(default = "default_stochastic_smooth")]
    pub d_smooth: usize,
}

impl Default for StochasticParams {
    fn default() -> Self {
        Self {
            period: default_period_14(),
            k_smooth: default_stochastic_smooth(),
            d_smooth: default_stochastic_smooth(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    #[serde(default = "default_period_20")]
    pub period: usize,
    /// Standard deviations between the middle and each outer band.
    #[serde(default = "default_bollinger_multiplier")]
    pub multiplier: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: default_period_20(),
            multiplier: default_bollinger_multiplier(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassIndexParams {
    #[serde(default = "default_mass_index_period")]
    pub period: usize,
}

impl Default for MassIndexParams {
    fn default() -> Self {
        Self {
            period: default_mass_index_period(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeParams {
    #[serde(default = "default_period_20")]
    pub period: usize,
    /// Band offset as a percentage of the EMA.
    #[serde(default = "default_envelope_percent")]
    pub percent: f64,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            period: default_period_20(),
            percent: default_envelope_percent(),
        }
    }
}

// =============================================================================
// IndicatorConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IndicatorConfig {
    #[serde(default)]
    pub rsi: PeriodParams,
    #[serde(default)]
    pub rmi: RmiParams,
    #[serde(default)]
    pub macd: MacdParams,
    #[serde(default)]
    pub stochastic: StochasticParams,
    #[serde(default)]
    pub bollinger: BollingerParams,
    #[serde(default)]
    pub cmo: LongPeriodParams,
    #[serde(default)]
    pub cci: LongPeriodParams,
    #[serde(default)]
    pub mass_index: MassIndexParams,
    #[serde(default)]
    pub imi: PeriodParams,
    #[serde(default)]
    pub envelopes: EnvelopeParams,
    #[serde(default)]
    pub cmf: LongPeriodParams,
    #[serde(default)]
    pub williams_r: PeriodParams,
    #[serde(default)]
    pub vroc: PeriodParams,
    #[serde(default)]
    pub wilder: PeriodParams,
}

impl IndicatorConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("failed to parse indicator config JSON")?;
        config
            .validate()
            .context("indicator config contains invalid parameters")?;
        Ok(config)
    }

    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning (see `load_or_default`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read indicator config from {}", path.display()))?;

        let config = Self::from_json_str(&content)
            .with_context(|| format!("failed to load indicator config from {}", path.display()))?;

        info!(
            path = %path.display(),
            rsi_period = config.rsi.period,
            macd = ?config.macd,
            "indicator config loaded"
        );

        Ok(config)
    }

    /// `load`, falling back to the defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(path = %path.display(), error = %reason, "using default indicator config");
                Self::default()
            }
        }
    }

    /// Run every indicator's parameter validation.
    pub fn validate(&self) -> IndicatorResult<()> {
        self.rsi().validate()?;
        self.rmi().validate()?;
        self.macd().validate()?;
        self.stochastic().validate()?;
        self.bollinger().validate()?;
        self.cmo().validate()?;
        self.cci().validate()?;
        self.mass_index().validate()?;
        self.imi().validate()?;
        self.envelopes().validate()?;
        self.cmf().validate()?;
        self.williams_r().validate()?;
        self.vroc().validate()?;
        self.wilder().validate()?;
        Ok(())
    }

    pub fn rsi(&self) -> Rsi {
        Rsi::new(self.rsi.period)
    }

    pub fn rmi(&self) -> Rmi {
        Rmi::new(self.rmi.momentum, self.rmi.period)
    }

    pub fn macd(&self) -> Macd {
        Macd::new(self.macd.fast, self.macd.slow, self.macd.signal)
    }

    pub fn stochastic(&self) -> Stochastic {
        let p = self.stochastic;
        Stochastic::new(p.period, p.k_smooth, p.d_smooth)
    }

    pub fn bollinger(&self) -> BollingerBands {
        BollingerBands::new(self.bollinger.period, self.bollinger.multiplier)
    }

    pub fn cmo(&self) -> Cmo {
        Cmo::new(self.cmo.period)
    }

    pub fn cci(&self) -> Cci {
        Cci::new(self.cci.period)
    }

    pub fn mass_index(&self) -> MassIndex {
        MassIndex::new(self.mass_index.period)
    }

    pub fn imi(&self) -> Imi {
        Imi::new(self.imi.period)
    }

    pub fn envelopes(&self) -> EmaEnvelopes {
        EmaEnvelopes::new(self.envelopes.period, self.envelopes.percent)
    }

    pub fn cmf(&self) -> ChaikinMoneyFlow {
        ChaikinMoneyFlow::new(self.cmf.period)
    }

    pub fn williams_r(&self) -> WilliamsR {
        WilliamsR::new(self.williams_r.period)
    }

    pub fn vroc(&self) -> VolumeRateOfChange {
        VolumeRateOfChange::new(self.vroc.period)
    }

    pub fn wilder(&self) -> WilderSmoothing {
        WilderSmoothing::new(self.wilder.period)
    }
}
