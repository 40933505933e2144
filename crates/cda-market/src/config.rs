//! Market generator configuration.

use cda_core::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the mean-reverting reference market.
///
/// Defaults describe a calm market around a 100.0 fundamental with a
/// 5 bps base spread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Price the series starts from.
    #[serde(default = "default_initial_price")]
    pub initial_price: f64,

    /// Fundamental price the process reverts toward.
    #[serde(default = "default_fundamental_price")]
    pub fundamental_price: f64,

    /// Per-step drift of the log-return.
    #[serde(default = "default_drift")]
    pub drift: f64,

    /// Per-step volatility of the log-return.
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Speed of reversion toward the fundamental.
    #[serde(default = "default_mean_reversion")]
    pub mean_reversion: f64,

    /// Price shift per unit of order-flow imbalance.
    #[serde(default = "default_price_impact")]
    pub price_impact: f64,

    /// Spread widening per unit of absolute imbalance.
    #[serde(default = "default_volume_impact")]
    pub volume_impact: f64,

    /// Relative base spread.
    #[serde(default = "default_base_spread")]
    pub base_spread: f64,

    /// Spread sensitivity to the realized shock size.
    #[serde(default = "default_spread_vol_sensitivity")]
    pub spread_vol_sensitivity: f64,

    /// Mean order-book volume per side (Poisson rate).
    #[serde(default = "default_base_volume")]
    pub base_volume: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            initial_price: default_initial_price(),
            fundamental_price: default_fundamental_price(),
            drift: default_drift(),
            volatility: default_volatility(),
            mean_reversion: default_mean_reversion(),
            price_impact: default_price_impact(),
            volume_impact: default_volume_impact(),
            base_spread: default_base_spread(),
            spread_vol_sensitivity: default_spread_vol_sensitivity(),
            base_volume: default_base_volume(),
        }
    }
}

impl GeneratorConfig {
    /// Reject parameters under which the process is undefined.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_price.is_finite() && self.initial_price > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "initial_price must be strictly positive, got {}",
                self.initial_price
            )));
        }
        if !(self.fundamental_price.is_finite() && self.fundamental_price > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "fundamental_price must be strictly positive, got {}",
                self.fundamental_price
            )));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !(self.base_spread.is_finite() && self.base_spread >= 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "base_spread must be non-negative, got {}",
                self.base_spread
            )));
        }
        if self.base_volume == 0 {
            return Err(CoreError::InvalidConfig(
                "base_volume must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn default_initial_price() -> f64 {
    100.0
}
fn default_fundamental_price() -> f64 {
    100.0
}
fn default_drift() -> f64 {
    0.0005
}
fn default_volatility() -> f64 {
    0.01
}
fn default_mean_reversion() -> f64 {
    0.05
}
fn default_price_impact() -> f64 {
    0.00001
}
fn default_volume_impact() -> f64 {
    0.000001
}
fn default_base_spread() -> f64 {
    0.0005 // 5 basis points
}
fn default_spread_vol_sensitivity() -> f64 {
    0.1
}
fn default_base_volume() -> u64 {
    5000
}
