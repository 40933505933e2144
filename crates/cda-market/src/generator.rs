//! Mean-reverting reference market generator.
//!
//! Produces illustrative (bid, ask, mid) series from a geometric process
//! pulled toward a noisy fundamental price, with an order-flow-imbalance
//! driven spread. Independent of any strategy; nothing here executes
//! orders or defines the authoritative market.

use cda_core::{CoreError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Poisson};
use serde::Serialize;

use crate::config::GeneratorConfig;

/// Relative noise on the fundamental price per step.
const FUNDAMENTAL_NOISE_STD: f64 = 0.0001;
/// EMA weight kept from the previous step's order-book volume.
const VOLUME_SMOOTHING: f64 = 0.8;
/// Weight of the fresh draw when smoothing the return shock.
const SHOCK_SMOOTHING: f64 = 0.3;

/// One generated tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickQuote {
    pub bid: f64,
    pub ask: f64,
    pub mid: f64,
}

/// Generates mean-reverting market price series.
#[derive(Debug)]
pub struct MarketGenerator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl MarketGenerator<StdRng> {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible series.
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MarketGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a series of `ticks` quotes.
    ///
    /// Each step draws a smoothed normal shock, applies drift, the Itô
    /// correction and reversion toward the noisy fundamental, then tilts
    /// the price and widens the spread by the order-flow imbalance of
    /// EMA-smoothed Poisson book volumes.
    pub fn generate(&mut self, ticks: usize) -> Result<Vec<TickQuote>> {
        let cfg = &self.config;
        let unit_normal = Normal::new(0.0, 1.0)
            .map_err(|e| CoreError::InvalidConfig(format!("unit normal: {e}")))?;
        let fundamental_noise = Normal::new(0.0, FUNDAMENTAL_NOISE_STD)
            .map_err(|e| CoreError::InvalidConfig(format!("fundamental noise: {e}")))?;
        let volume_dist = Poisson::new(cfg.base_volume as f64)
            .map_err(|e| CoreError::InvalidConfig(format!("volume distribution: {e}")))?;

        let mut current_price = cfg.initial_price;
        let mut volume_buy: f64 = volume_dist.sample(&mut self.rng);
        let mut volume_sell: f64 = volume_dist.sample(&mut self.rng);

        let mut prices = Vec::with_capacity(ticks);
        for i in 0..ticks {
            let fundamental =
                cfg.fundamental_price * (1.0 + fundamental_noise.sample(&mut self.rng));

            let mut epsilon = unit_normal.sample(&mut self.rng);
            if i > 0 {
                epsilon = (1.0 - SHOCK_SMOOTHING) * epsilon
                    + SHOCK_SMOOTHING * unit_normal.sample(&mut self.rng);
            }

            let log_return = cfg.drift - 0.5 * cfg.volatility * cfg.volatility
                + cfg.volatility * epsilon
                + cfg.mean_reversion * (fundamental.ln() - current_price.ln());
            let stepped_price = current_price * log_return.exp();

            volume_buy = VOLUME_SMOOTHING * volume_buy
                + (1.0 - VOLUME_SMOOTHING) * volume_dist.sample(&mut self.rng);
            volume_sell = VOLUME_SMOOTHING * volume_sell
                + (1.0 - VOLUME_SMOOTHING) * volume_dist.sample(&mut self.rng);

            let total_volume = volume_buy + volume_sell;
            let imbalance = if total_volume > 0.0 {
                (volume_buy - volume_sell) / total_volume
            } else {
                0.0
            };

            let adjusted_price = stepped_price * (1.0 + cfg.price_impact * imbalance);
            let relative_spread = cfg.base_spread
                + cfg.spread_vol_sensitivity * cfg.volatility * epsilon.abs()
                + cfg.volume_impact * imbalance.abs();
            let spread = adjusted_price * relative_spread;

            if !(adjusted_price.is_finite() && adjusted_price > 0.0) {
                return Err(CoreError::DegenerateMarket(format!(
                    "generated price collapsed to {adjusted_price} at tick {i}"
                )));
            }

            prices.push(TickQuote {
                bid: adjusted_price - spread / 2.0,
                ask: adjusted_price + spread / 2.0,
                mid: adjusted_price,
            });

            current_price = adjusted_price;
        }

        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MarketGenerator {
        MarketGenerator::with_seed(GeneratorConfig::default(), 42).unwrap()
    }

    #[test]
    fn test_generates_requested_length() {
        let prices = seeded().generate(252).unwrap();
        assert_eq!(prices.len(), 252);
    }

    #[test]
    fn test_quotes_are_ordered_and_positive() {
        let prices = seeded().generate(252).unwrap();
        for (i, tick) in prices.iter().enumerate() {
            assert!(tick.bid > 0.0, "non-positive bid at tick {i}");
            assert!(tick.ask > tick.bid, "crossed quote at tick {i}");
            assert!(tick.bid <= tick.mid && tick.mid <= tick.ask);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = seeded().generate(100).unwrap();
        let b = seeded().generate(100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = seeded().generate(100).unwrap();
        let b = MarketGenerator::with_seed(GeneratorConfig::default(), 43)
            .unwrap()
            .generate(100)
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_mean_reversion_pulls_toward_fundamental() {
        // Start far below the fundamental with no noise: strong
        // reversion must close most of the gap over the series.
        let config = GeneratorConfig {
            initial_price: 50.0,
            fundamental_price: 100.0,
            drift: 0.0,
            volatility: 0.0,
            mean_reversion: 0.2,
            ..Default::default()
        };
        let prices = MarketGenerator::with_seed(config, 1)
            .unwrap()
            .generate(100)
            .unwrap();
        let last = prices.last().unwrap().mid;
        assert!(
            (last - 100.0).abs() < 5.0,
            "expected reversion toward 100, ended at {last}"
        );
    }

    #[test]
    fn test_zero_volatility_tightens_spread() {
        // With no shock term the relative spread stays near base_spread.
        let config = GeneratorConfig {
            volatility: 0.0,
            ..Default::default()
        };
        let prices = MarketGenerator::with_seed(config, 5)
            .unwrap()
            .generate(50)
            .unwrap();
        for tick in &prices {
            let relative = (tick.ask - tick.bid) / tick.mid;
            assert!(relative < 0.001, "spread {relative} wider than expected");
        }
    }

    #[test]
    fn test_empty_series() {
        let prices = seeded().generate(0).unwrap();
        assert!(prices.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig {
            initial_price: -1.0,
            ..Default::default()
        };
        assert!(MarketGenerator::with_seed(config, 1).is_err());
    }
}
