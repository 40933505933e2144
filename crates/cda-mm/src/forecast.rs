//! Short-horizon Monte Carlo price forecaster.
//!
//! Resamples recent log-returns into simulated forward paths and reports
//! the mean terminal price together with an interquartile band. The
//! random source is injected by the caller, so a seeded generator makes
//! every projection reproducible.

use cda_core::{CoreError, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::history::PriceHistory;

/// Price projection for the next few ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forecast {
    /// Mean simulated terminal price.
    pub expected: f64,
    /// 25th percentile of the terminal-price distribution.
    pub lower: f64,
    /// 75th percentile of the terminal-price distribution.
    pub upper: f64,
}

impl Forecast {
    /// Width of the interquartile band.
    pub fn range(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Monte Carlo forecaster over a trailing return window.
#[derive(Debug, Clone)]
pub struct Forecaster {
    window_size: usize,
    num_simulations: usize,
    horizon: usize,
}

impl Forecaster {
    pub fn new(window_size: usize, num_simulations: usize, horizon: usize) -> Self {
        Self {
            window_size,
            num_simulations,
            horizon,
        }
    }

    /// Project the short-horizon price distribution from `current_price`
    /// and the recorded history.
    ///
    /// With `window_size` or fewer observations there is no return
    /// sample to estimate from: the forecast degenerates to the current
    /// price with a fixed ±1% band.
    pub fn project<R: Rng>(
        &self,
        rng: &mut R,
        current_price: f64,
        history: &PriceHistory,
    ) -> Result<Forecast> {
        if !(current_price.is_finite() && current_price > 0.0) {
            return Err(CoreError::DegenerateMarket(format!(
                "cannot forecast from non-positive price {current_price}"
            )));
        }

        if history.len() <= self.window_size {
            return Ok(Forecast {
                expected: current_price,
                lower: current_price * 0.99,
                upper: current_price * 1.01,
            });
        }

        let window: Vec<f64> = history.tail(self.window_size).collect();
        if let Some(bad) = window.iter().find(|p| !(p.is_finite() && **p > 0.0)) {
            return Err(CoreError::DegenerateMarket(format!(
                "non-positive price {bad} in return window"
            )));
        }

        let returns: Vec<f64> = window.windows(2).map(|w| w[1].ln() - w[0].ln()).collect();
        let drift = mean(&returns);
        let volatility = population_std(&returns, drift);

        let increments = Normal::new(drift, volatility).map_err(|e| {
            CoreError::DegenerateMarket(format!("invalid return distribution: {e}"))
        })?;

        let mut terminals = Vec::with_capacity(self.num_simulations);
        for _ in 0..self.num_simulations {
            let mut cumulative = 0.0;
            for _ in 0..self.horizon {
                cumulative += increments.sample(rng);
            }
            terminals.push(current_price * cumulative.exp());
        }

        let expected = mean(&terminals);
        terminals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let lower = percentile(&terminals, 25.0);
        let upper = percentile(&terminals, 75.0);

        if !(expected.is_finite() && lower.is_finite() && upper.is_finite()) {
            return Err(CoreError::DegenerateMarket(
                "simulated terminal prices are not finite".into(),
            ));
        }

        Ok(Forecast {
            expected,
            lower,
            upper,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std(values: &[f64], mean: f64) -> f64 {
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Linear-interpolation percentile over an ascending-sorted sample.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = pct / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi.min(n - 1)] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn forecaster() -> Forecaster {
        Forecaster::new(20, 30, 3)
    }

    fn history_of(prices: &[f64]) -> PriceHistory {
        let mut history = PriceHistory::with_capacity(prices.len().max(21));
        for p in prices {
            history.push(*p);
        }
        history
    }

    #[test]
    fn test_cold_start_empty_history() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = PriceHistory::with_capacity(21);
        let forecast = forecaster().project(&mut rng, 100.0, &history).unwrap();
        assert_eq!(forecast.expected, 100.0);
        assert_eq!(forecast.lower, 99.0);
        assert_eq!(forecast.upper, 101.0);
    }

    #[test]
    fn test_cold_start_until_window_exceeded() {
        // Exactly window_size observations: still the degenerate branch.
        let mut rng = StdRng::seed_from_u64(1);
        let history = history_of(&[100.0; 20]);
        let forecast = forecaster().project(&mut rng, 100.0, &history).unwrap();
        assert_eq!(forecast.expected, 100.0);
        assert!((forecast.range() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_volatility_collapses_band() {
        // 21 identical prices: drift = 0, vol = 0, every path lands on
        // the current price exactly.
        let mut rng = StdRng::seed_from_u64(7);
        let history = history_of(&[100.0; 21]);
        let forecast = forecaster().project(&mut rng, 100.0, &history).unwrap();
        assert_eq!(forecast.expected, 100.0);
        assert_eq!(forecast.range(), 0.0);
    }

    #[test]
    fn test_deterministic_drift_projected() {
        // Prices growing 1% per tick: vol = 0, drift = ln(1.01), so each
        // terminal is current * exp(3 * ln 1.01) = current * 1.01^3.
        let prices: Vec<f64> = (0..21).map(|i| 100.0 * 1.01f64.powi(i)).collect();
        let current = *prices.last().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let forecast = forecaster()
            .project(&mut rng, current, &history_of(&prices))
            .unwrap();
        let expected = current * 1.01f64.powi(3);
        assert!((forecast.expected - expected).abs() < 1e-6);
        assert!(forecast.range().abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let prices: Vec<f64> = (0..21).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
        let history = history_of(&prices);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = forecaster().project(&mut rng_a, 100.0, &history).unwrap();
        let b = forecaster().project(&mut rng_b, 100.0, &history).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_band_ordered_and_brackets_noise() {
        let prices: Vec<f64> = (0..21).map(|i| 100.0 + (i as f64 * 1.3).cos()).collect();
        let history = history_of(&prices);
        let mut rng = StdRng::seed_from_u64(9);
        let forecast = forecaster().project(&mut rng, 100.0, &history).unwrap();
        assert!(forecast.lower <= forecast.upper);
        assert!(forecast.expected.is_finite());
    }

    #[test]
    fn test_non_positive_current_price_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let history = PriceHistory::with_capacity(21);
        let err = forecaster().project(&mut rng, 0.0, &history).unwrap_err();
        assert!(matches!(err, CoreError::DegenerateMarket(_)));
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // rank = 0.25 * 3 = 0.75 -> 1.0 + 0.75 * (2.0 - 1.0) = 1.75
        assert!((percentile(&sorted, 25.0) - 1.75).abs() < 1e-12);
        // rank = 0.75 * 3 = 2.25 -> 3.0 + 0.25 * (4.0 - 3.0) = 3.25
        assert!((percentile(&sorted, 75.0) - 3.25).abs() < 1e-12);
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 100.0), 4.0);
    }
}
