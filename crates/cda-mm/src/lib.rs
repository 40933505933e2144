//! Monte Carlo market-making strategy for the CDA bot.
//!
//! Turns the previous tick's quoted prices plus the account state into a
//! new two-sided quote:
//!
//! ```text
//! harness tick → MonteCarloMaker::update()
//!                 ├─ PriceHistory: record the previous midpoint
//!                 ├─ Forecaster: expected price + interquartile band
//!                 ├─ compose_quotes: additive spread + inventory and
//!                 │  prediction skews
//!                 └─ size_quotes: directional sizing, inventory circuit
//!                    breaker, capital clamp
//!                      ↓
//!                 Quote { bid, bid_size, ask, ask_size, limit order }
//! ```
//!
//! All randomness flows through an injected, seedable generator, so a
//! fixed seed makes full runs reproducible.

pub mod config;
pub mod forecast;
pub mod history;
pub mod quote_engine;
pub mod sizing;
pub mod strategy;

pub use config::MakerConfig;
pub use forecast::{Forecast, Forecaster};
pub use history::PriceHistory;
pub use quote_engine::{compose_quotes, QuotePrices};
pub use sizing::{size_quotes, QuoteSizes};
pub use strategy::MonteCarloMaker;
