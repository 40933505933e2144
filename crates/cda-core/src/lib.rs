//! Core domain types for the CDA market-making bot.
//!
//! This crate provides the types shared between strategies and the
//! simulation harness:
//! - `OrderType`: execution mode (limit/market) plus validity window
//! - `Quote`: one tick's two-sided quoting decision
//! - `MarketMaker`: the per-tick strategy contract
//! - `CoreError`: the error taxonomy for degenerate inputs

pub mod error;
pub mod maker;
pub mod order;
pub mod quote;

pub use error::{CoreError, Result};
pub use maker::MarketMaker;
pub use order::{OrderKind, OrderType};
pub use quote::Quote;
