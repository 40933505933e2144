//! Per-tick quote output.

use serde::{Deserialize, Serialize};

use crate::order::OrderType;

/// One tick's quoting decision: two-sided prices and sizes, plus the
/// execution mode they are submitted under.
///
/// Sizes are non-negative integers by construction. Whenever the spread
/// the prices were composed from is positive, `bid_price < ask_price`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub bid_price: f64,
    pub bid_size: u32,
    pub ask_price: f64,
    pub ask_size: u32,
    pub order: OrderType,
}

impl Quote {
    /// Quoted spread (ask minus bid).
    pub fn spread(&self) -> f64 {
        self.ask_price - self.bid_price
    }

    /// Midpoint of the quoted prices.
    pub fn mid(&self) -> f64 {
        (self.bid_price + self.ask_price) / 2.0
    }

    /// Cash value of the bid side at its quoted price.
    pub fn bid_notional(&self) -> f64 {
        self.bid_price * f64::from(self.bid_size)
    }

    /// Cash value of the ask side at its quoted price.
    pub fn ask_notional(&self) -> f64 {
        self.ask_price * f64::from(self.ask_size)
    }
}
