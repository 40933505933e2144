//! Error types for cda-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A limit order whose window ends before it begins.
    #[error("Invalid order window: to_time {to} precedes from_time {from}")]
    InvalidOrderWindow { from: u64, to: u64 },

    /// Market state under which the quote math is undefined: non-positive
    /// or non-finite prices, a crossed previous book, negative cash.
    #[error("Degenerate market: {0}")]
    DegenerateMarket(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
