//! Strategy configuration.

use cda_core::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Monte Carlo market-maker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakerConfig {
    /// Trailing history length used for return statistics.
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Number of simulated price paths per forecast.
    #[serde(default = "default_num_simulations")]
    pub num_simulations: usize,

    /// Steps per simulated path. Short horizons keep the projection
    /// local to the next few ticks.
    #[serde(default = "default_horizon")]
    pub horizon: usize,

    /// Inventory scale used to normalize skew and sizing. The circuit
    /// breaker engages above 70% of this.
    #[serde(default = "default_max_position")]
    pub max_position: u32,

    /// Spread floor, in price units. Volatility and inventory terms are
    /// added on top of it.
    #[serde(default = "default_base_spread")]
    pub base_spread: f64,

    /// Baseline order size the directional branch scales from.
    #[serde(default = "default_base_size")]
    pub base_size: u32,

    /// Fraction of cash usable per single order.
    #[serde(default = "default_max_notional_fraction")]
    pub max_notional_fraction: f64,

    /// Validity horizon of emitted limit orders, in ticks.
    #[serde(default = "default_quote_ttl")]
    pub quote_ttl: u64,
}

impl Default for MakerConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            num_simulations: default_num_simulations(),
            horizon: default_horizon(),
            max_position: default_max_position(),
            base_spread: default_base_spread(),
            base_size: default_base_size(),
            max_notional_fraction: default_max_notional_fraction(),
            quote_ttl: default_quote_ttl(),
        }
    }
}

impl MakerConfig {
    /// Reject values that would make the quote math undefined.
    pub fn validate(&self) -> Result<()> {
        if self.window_size < 2 {
            return Err(CoreError::InvalidConfig(format!(
                "window_size must be at least 2, got {}",
                self.window_size
            )));
        }
        if self.num_simulations == 0 {
            return Err(CoreError::InvalidConfig(
                "num_simulations must be positive".into(),
            ));
        }
        if self.horizon == 0 {
            return Err(CoreError::InvalidConfig("horizon must be positive".into()));
        }
        if self.max_position == 0 {
            return Err(CoreError::InvalidConfig(
                "max_position must be positive".into(),
            ));
        }
        if !(self.base_spread.is_finite() && self.base_spread > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "base_spread must be strictly positive, got {}",
                self.base_spread
            )));
        }
        if self.base_size == 0 {
            return Err(CoreError::InvalidConfig(
                "base_size must be positive".into(),
            ));
        }
        if !(self.max_notional_fraction.is_finite()
            && self.max_notional_fraction > 0.0
            && self.max_notional_fraction <= 1.0)
        {
            return Err(CoreError::InvalidConfig(format!(
                "max_notional_fraction must be in (0, 1], got {}",
                self.max_notional_fraction
            )));
        }
        Ok(())
    }
}

fn default_window_size() -> usize {
    20
}
fn default_num_simulations() -> usize {
    30
}
fn default_horizon() -> usize {
    3
}
fn default_max_position() -> u32 {
    50
}
fn default_base_spread() -> f64 {
    0.3
}
fn default_base_size() -> u32 {
    15
}
fn default_max_notional_fraction() -> f64 {
    0.2 // don't use more than 20% of capital per order
}
fn default_quote_ttl() -> u64 {
    100
}
