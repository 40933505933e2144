//! The strategy contract driven by the simulation harness.

use crate::error::Result;
use crate::quote::Quote;

/// A per-tick market-making strategy.
///
/// The harness calls [`update`](MarketMaker::update) exactly once per
/// tick with monotonically non-decreasing timestamps. It owns everything
/// outside the decision itself: it maintains `holding` and `money` across
/// ticks from fills, expires limit orders outside their validity window,
/// and, within a tick where both are active, executes market orders
/// before limit orders. Implementations only emit intents; they never
/// execute orders.
pub trait MarketMaker {
    /// Produce this tick's quote from the previous interval's quoted
    /// prices and the current account state.
    ///
    /// Preconditions: `prev_bid_price > 0`,
    /// `prev_ask_price >= prev_bid_price`, `money >= 0`. Violations fail
    /// fast with [`CoreError::DegenerateMarket`](crate::CoreError) rather
    /// than propagating NaN into the quote math.
    ///
    /// Side effect: appends the midpoint of the two previous prices to
    /// the strategy's internal price history.
    fn update(
        &mut self,
        prev_bid_price: f64,
        prev_ask_price: f64,
        holding: i64,
        money: f64,
        timestamp: u64,
    ) -> Result<Quote>;
}
