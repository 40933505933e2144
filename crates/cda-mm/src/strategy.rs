//! The Monte Carlo market-making strategy.

use cda_core::{CoreError, MarketMaker, OrderType, Quote, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::MakerConfig;
use crate::forecast::Forecaster;
use crate::history::PriceHistory;
use crate::quote_engine::compose_quotes;
use crate::sizing::size_quotes;

/// Market maker quoting around a Monte Carlo forecast of the mid-price.
///
/// Per tick: record the previous midpoint, project the short-horizon
/// price distribution, compose skewed bid/ask prices, and size both
/// sides under the inventory and capital limits. Quotes are emitted as
/// limit orders valid for `quote_ttl` ticks.
///
/// The random source is part of the strategy state; construct with
/// [`with_seed`](MonteCarloMaker::with_seed) for reproducible runs.
#[derive(Debug)]
pub struct MonteCarloMaker<R = StdRng> {
    config: MakerConfig,
    history: PriceHistory,
    forecaster: Forecaster,
    rng: R,
}

impl MonteCarloMaker<StdRng> {
    pub fn new(config: MakerConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic strategy: same seed + same inputs = same quotes.
    pub fn with_seed(config: MakerConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MonteCarloMaker<R> {
    /// Build the strategy around an externally supplied random source.
    pub fn with_rng(config: MakerConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let history = PriceHistory::with_capacity(config.window_size + 1);
        let forecaster = Forecaster::new(
            config.window_size,
            config.num_simulations,
            config.horizon,
        );
        Ok(Self {
            config,
            history,
            forecaster,
            rng,
        })
    }

    pub fn config(&self) -> &MakerConfig {
        &self.config
    }

    /// Number of mid-prices recorded so far (capped at the window).
    pub fn observed_ticks(&self) -> usize {
        self.history.len()
    }
}

impl<R: Rng> MarketMaker for MonteCarloMaker<R> {
    fn update(
        &mut self,
        prev_bid_price: f64,
        prev_ask_price: f64,
        holding: i64,
        money: f64,
        timestamp: u64,
    ) -> Result<Quote> {
        if !(prev_bid_price.is_finite() && prev_bid_price > 0.0) {
            return Err(CoreError::DegenerateMarket(format!(
                "previous bid must be strictly positive, got {prev_bid_price}"
            )));
        }
        if !(prev_ask_price.is_finite() && prev_ask_price >= prev_bid_price) {
            return Err(CoreError::DegenerateMarket(format!(
                "previous ask {prev_ask_price} below previous bid {prev_bid_price}"
            )));
        }
        if !(money.is_finite() && money >= 0.0) {
            return Err(CoreError::DegenerateMarket(format!(
                "money must be non-negative, got {money}"
            )));
        }

        let mid = (prev_bid_price + prev_ask_price) / 2.0;
        self.history.push(mid);

        let forecast = self.forecaster.project(&mut self.rng, mid, &self.history)?;
        let prices = compose_quotes(mid, &forecast, holding, &self.config)?;
        let sizes = size_quotes(
            mid,
            &forecast,
            holding,
            money,
            prices.bid,
            prices.ask,
            &self.config,
        )?;
        let order = OrderType::new_limit_order(timestamp, timestamp + self.config.quote_ttl)?;

        debug!(
            timestamp,
            mid,
            expected = forecast.expected,
            bid = prices.bid,
            ask = prices.ask,
            bid_size = sizes.bid,
            ask_size = sizes.ask,
            "tick quote"
        );

        Ok(Quote {
            bid_price: prices.bid,
            bid_size: sizes.bid,
            ask_price: prices.ask,
            ask_size: sizes.ask,
            order,
        })
    }
}
