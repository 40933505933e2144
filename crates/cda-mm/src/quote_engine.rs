//! Quote price composition.
//!
//! Turns the forecast, the current inventory and the configured base
//! spread into bid/ask prices: an additive spread around the midpoint,
//! shifted by an inventory skew and a prediction skew.

use cda_core::{CoreError, Result};

use crate::config::MakerConfig;
use crate::forecast::Forecast;

/// Half of the forecast band's relative width widens the spread.
const VOLATILITY_SPREAD_WEIGHT: f64 = 0.5;
/// Spread widening per unit of inventory utilisation.
const POSITION_SPREAD_WEIGHT: f64 = 0.4;
/// Mean-reverting shift against the held inventory: quotes move down as
/// inventory grows long, up as it grows short.
const POSITION_SKEW_WEIGHT: f64 = 0.3;
/// Lean of both quotes toward the forecast price.
const PREDICTION_SKEW_WEIGHT: f64 = 0.2;

/// Composed bid/ask prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotePrices {
    pub bid: f64,
    pub ask: f64,
    /// The full spread the prices were built from.
    pub spread: f64,
}

/// Compose bid/ask prices around `mid`.
///
/// The spread terms are additive and each skew shifts both sides
/// equally, so `ask - bid` equals the composed spread and the quote
/// never crosses while `base_spread > 0`. The composed spread has no
/// upper clamp: extreme volatility or inventory widens the quote without
/// bound.
pub fn compose_quotes(
    mid: f64,
    forecast: &Forecast,
    holding: i64,
    config: &MakerConfig,
) -> Result<QuotePrices> {
    if !(mid.is_finite() && mid > 0.0) {
        return Err(CoreError::DegenerateMarket(format!(
            "cannot quote around non-positive midpoint {mid}"
        )));
    }

    let max_position = f64::from(config.max_position);
    let holding = holding as f64;

    let volatility_spread = forecast.range() / mid * VOLATILITY_SPREAD_WEIGHT;
    let position_spread = holding.abs() / max_position * POSITION_SPREAD_WEIGHT;
    let total_spread = config.base_spread + volatility_spread + position_spread;

    let position_skew = -holding / max_position * POSITION_SKEW_WEIGHT;
    let prediction_skew = (forecast.expected - mid) * PREDICTION_SKEW_WEIGHT;
    let shift = position_skew + prediction_skew;

    Ok(QuotePrices {
        bid: mid - total_spread / 2.0 + shift,
        ask: mid + total_spread / 2.0 + shift,
        spread: total_spread,
    })
}
