//! Order intent types.
//!
//! Every quote the strategy emits is tagged with an [`OrderType`] telling
//! the harness how to execute it: immediately at the prevailing market
//! price, or resting at the quoted limit prices within a validity window.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// Execution mode of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Resting order. A buy executes only at the limit price or lower,
    /// a sell only at the limit price or higher, while the window is open.
    Limit,
    /// Immediate order at the market price. Quoted prices are advisory;
    /// the market sets the execution price.
    Market,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Market => write!(f, "market"),
        }
    }
}

/// Execution mode plus inclusive validity window.
///
/// Market orders have no duration: their window collapses to the issuing
/// timestamp. Within one tick the harness executes market orders before
/// limit orders. Immutable once constructed; the quote that carries it
/// owns it, and the harness discards it after use or expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderType {
    kind: OrderKind,
    from_time: u64,
    to_time: u64,
}

impl OrderType {
    /// Limit order valid on the inclusive `[from_time, to_time]` window.
    pub fn new_limit_order(from_time: u64, to_time: u64) -> Result<Self> {
        if to_time < from_time {
            return Err(CoreError::InvalidOrderWindow {
                from: from_time,
                to: to_time,
            });
        }
        Ok(Self {
            kind: OrderKind::Limit,
            from_time,
            to_time,
        })
    }

    /// Market order issued at `timestamp`. The window collapses to a
    /// single instant.
    pub fn new_market_order(timestamp: u64) -> Self {
        Self {
            kind: OrderKind::Market,
            from_time: timestamp,
            to_time: timestamp,
        }
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub fn from_time(&self) -> u64 {
        self.from_time
    }

    pub fn to_time(&self) -> u64 {
        self.to_time
    }

    /// Whether the order may still execute at `timestamp`.
    pub fn is_active_at(&self, timestamp: u64) -> bool {
        self.from_time <= timestamp && timestamp <= self.to_time
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{}]", self.kind, self.from_time, self.to_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_order_window_collapses() {
        let order = OrderType::new_market_order(42);
        assert_eq!(order.kind(), OrderKind::Market);
        assert_eq!(order.from_time(), 42);
        assert_eq!(order.to_time(), 42);
    }

    #[test]
    fn test_limit_order_window() {
        let order = OrderType::new_limit_order(10, 110).unwrap();
        assert_eq!(order.kind(), OrderKind::Limit);
        assert_eq!(order.from_time(), 10);
        assert_eq!(order.to_time(), 110);
    }

    #[test]
    fn test_limit_order_instant_window_allowed() {
        let order = OrderType::new_limit_order(7, 7).unwrap();
        assert!(order.is_active_at(7));
    }

    #[test]
    fn test_limit_order_inverted_window_rejected() {
        let err = OrderType::new_limit_order(100, 10).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidOrderWindow { from: 100, to: 10 }
        ));
    }

    #[test]
    fn test_is_active_at_bounds_inclusive() {
        let order = OrderType::new_limit_order(10, 20).unwrap();
        assert!(!order.is_active_at(9));
        assert!(order.is_active_at(10));
        assert!(order.is_active_at(20));
        assert!(!order.is_active_at(21));
    }

    #[test]
    fn test_display() {
        let order = OrderType::new_limit_order(0, 100).unwrap();
        assert_eq!(order.to_string(), "limit[0..100]");
        assert_eq!(OrderType::new_market_order(5).to_string(), "market[5..5]");
    }
}
