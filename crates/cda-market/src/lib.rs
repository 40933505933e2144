//! Reference market generator for the CDA bot.
//!
//! A configurable mean-reverting geometric process with an
//! order-flow-imbalance driven spread, used to produce illustrative
//! (bid, ask, mid) price series for driving strategies in simulation.
//! It is an independent collaborator of the strategy crates: strategies
//! never invoke it, and it never executes orders.

pub mod config;
pub mod generator;

pub use config::GeneratorConfig;
pub use generator::{MarketGenerator, TickQuote};
