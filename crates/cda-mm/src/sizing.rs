//! Order sizing and risk overrides.
//!
//! Sizes the two sides asymmetrically from the forecast direction and
//! the current inventory, then applies the inventory circuit breaker and
//! the per-order capital clamp, in that fixed order. The breaker always
//! wins over the directional branch.

use cda_core::{CoreError, Result};
use tracing::warn;

use crate::config::MakerConfig;
use crate::forecast::Forecast;

/// Inventory utilisation beyond which the circuit breaker engages.
const BREAKER_RATIO: f64 = 0.7;
/// Forced size on the side that would grow the position further.
const BREAKER_MIN_SIZE: u32 = 5;
/// Size floor on the side that reduces the position.
const BREAKER_REDUCE_SIZE: u32 = 30;

/// Bid/ask sizes after all risk rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteSizes {
    pub bid: u32,
    pub ask: u32,
}

/// Size both sides of the quote.
///
/// Sizing leans on the side that reduces inventory when the forecast
/// agrees with reducing it, and stays small on the side that would add
/// exposure against the forecast. Above 70% inventory utilisation the
/// directional result is overridden outright; the capital clamp bounds
/// each side's notional to `money * max_notional_fraction` last.
pub fn size_quotes(
    mid: f64,
    forecast: &Forecast,
    holding: i64,
    money: f64,
    bid_price: f64,
    ask_price: f64,
    config: &MakerConfig,
) -> Result<QuoteSizes> {
    if !(mid.is_finite() && mid > 0.0) {
        return Err(CoreError::DegenerateMarket(format!(
            "cannot size orders around non-positive midpoint {mid}"
        )));
    }
    if !(money.is_finite() && money >= 0.0) {
        return Err(CoreError::DegenerateMarket(format!(
            "cannot size orders with negative cash {money}"
        )));
    }
    if !(bid_price.is_finite() && bid_price > 0.0 && ask_price.is_finite() && ask_price > 0.0) {
        return Err(CoreError::DegenerateMarket(format!(
            "quote prices collapsed to non-positive values: bid {bid_price}, ask {ask_price}"
        )));
    }

    let base = f64::from(config.base_size);
    let confidence_factor = forecast.range() / mid;

    let (mut bid_size, mut ask_size) = if holding > 0 {
        if mid > forecast.expected {
            // Long and predicted down: unload aggressively, buy little.
            ((base * 0.5) as u32, (base * (1.5 + confidence_factor)) as u32)
        } else {
            // Long and predicted up: default ask, half bid.
            ((base * 0.5) as u32, base as u32)
        }
    } else if mid < forecast.expected {
        // Short or flat and predicted up: accumulate aggressively.
        ((base * (1.5 + confidence_factor)) as u32, (base * 0.5) as u32)
    } else {
        // Short or flat and predicted down: default bid, half ask.
        (base as u32, (base * 0.5) as u32)
    };

    let utilisation = holding.unsigned_abs() as f64 / f64::from(config.max_position);
    if utilisation > BREAKER_RATIO {
        warn!(holding, utilisation, "inventory circuit breaker engaged");
        if holding > 0 {
            bid_size = BREAKER_MIN_SIZE;
            ask_size = ask_size.max(BREAKER_REDUCE_SIZE);
        } else {
            ask_size = BREAKER_MIN_SIZE;
            bid_size = bid_size.max(BREAKER_REDUCE_SIZE);
        }
    }

    let max_notional = money * config.max_notional_fraction;
    bid_size = bid_size.min((max_notional / bid_price) as u32);
    ask_size = ask_size.min((max_notional / ask_price) as u32);

    Ok(QuoteSizes {
        bid: bid_size,
        ask: ask_size,
    })
}
