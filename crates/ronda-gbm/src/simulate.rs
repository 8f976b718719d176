//! Monte Carlo price-path generation under Geometric Brownian Motion.

use ndarray::{Array2, Axis};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use ronda_traits::{PriceSeries, Result, RondaError, TRADING_DAYS_PER_YEAR};
use serde::{Deserialize, Serialize};

use crate::estimate::{ReturnStatistics, estimate};

/// Default per-step time fraction of a year: one trading day.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / TRADING_DAYS_PER_YEAR;

/// Configuration for a GBM simulation run.
///
/// Immutable once constructed and cheap to clone; every call site passes
/// it by reference into the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent price paths to generate.
    pub simulation_paths: usize,
    /// Number of simulated steps per path (the prediction horizon).
    pub horizon_days: usize,
    /// Per-step time fraction of a year (default 1/252, one trading day).
    pub time_step: f64,
    /// Trailing observation count used for return estimation.
    pub window_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation_paths: 1000,
            horizon_days: 252,
            time_step: DEFAULT_TIME_STEP,
            window_size: 30,
        }
    }
}

impl SimulationConfig {
    /// Check that all dimensions and the time step are usable.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidConfig`] if `simulation_paths`,
    /// `horizon_days` or `time_step` is not strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.simulation_paths == 0 {
            return Err(RondaError::InvalidConfig(
                "simulation_paths must be positive".to_string(),
            ));
        }
        if self.horizon_days == 0 {
            return Err(RondaError::InvalidConfig(
                "horizon_days must be positive".to_string(),
            ));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(RondaError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}

/// A dense matrix of simulated prices, shape `[paths][horizon_days]`.
///
/// Entry `[p][d]` is the simulated price of path `p` at day `d + 1`; day
/// zero is the anchor price and is not stored. Produced by one simulation
/// call and consumed immediately by [`summarize`](crate::summarize).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPaths {
    matrix: Array2<f64>,
}

impl SimulatedPaths {
    pub(crate) const fn from_matrix(matrix: Array2<f64>) -> Self {
        Self { matrix }
    }

    /// The underlying price matrix, paths × days.
    pub const fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// Number of simulated paths.
    pub fn num_paths(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of simulated steps per path.
    pub fn horizon_days(&self) -> usize {
        self.matrix.ncols()
    }

    /// The last-day price of every path.
    pub fn terminal_prices(&self) -> Vec<f64> {
        match self.matrix.ncols() {
            0 => Vec::new(),
            n => self.matrix.column(n - 1).to_vec(),
        }
    }
}

/// Generate GBM price paths from freshly drawn standard-normal variates.
///
/// Uses the exact log-normal discretization: per step,
/// `drift = (μ − σ²/2)·dt` and `diffusion = σ·√dt·Z`, accumulated along
/// the time axis and exponentiated against the anchor price. The whole
/// matrix is produced with vectorized array operations; this is the
/// dominant cost center of the toolkit.
///
/// The simulation is stochastic by design. Fixing the seed of `rng` makes
/// repeated runs bit-identical; seeding policy belongs to the caller.
///
/// # Errors
///
/// Returns [`RondaError::InvalidConfig`] for non-positive dimensions,
/// time step, or anchor price.
pub fn simulate<R: Rng>(
    current_price: f64,
    stats: ReturnStatistics,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulatedPaths> {
    config.validate()?;
    let draws = Array2::from_shape_simple_fn(
        (config.simulation_paths, config.horizon_days),
        || StandardNormal.sample(&mut *rng),
    );
    simulate_with_draws(current_price, stats, config, draws)
}

/// Generate GBM price paths from pre-drawn standard-normal increments.
///
/// This is the deterministic kernel behind [`simulate`]: callers that
/// need explicit control over the random source (reproducibility
/// harnesses, degenerate all-zero-diffusion runs) can supply the draw
/// matrix directly. `draws` must have shape
/// `[simulation_paths][horizon_days]`.
///
/// # Errors
///
/// Returns [`RondaError::InvalidConfig`] for invalid config or anchor
/// price, or when the draw matrix does not match the configured shape.
pub fn simulate_with_draws(
    current_price: f64,
    stats: ReturnStatistics,
    config: &SimulationConfig,
    draws: Array2<f64>,
) -> Result<SimulatedPaths> {
    config.validate()?;
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(RondaError::InvalidConfig(format!(
            "current price must be positive and finite, got {current_price}"
        )));
    }
    let expected_shape = (config.simulation_paths, config.horizon_days);
    if draws.dim() != expected_shape {
        return Err(RondaError::InvalidConfig(format!(
            "draw matrix has shape {:?}, expected {:?}",
            draws.dim(),
            expected_shape
        )));
    }

    let dt = config.time_step;
    let drift = (stats.mean_annualized - 0.5 * stats.std_annualized.powi(2)) * dt;
    let vol_step = stats.std_annualized * dt.sqrt();

    let mut log_paths = draws;
    log_paths.mapv_inplace(|z| drift + vol_step * z);
    log_paths.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr += prev);
    log_paths.mapv_inplace(|log_return| current_price * log_return.exp());

    Ok(SimulatedPaths::from_matrix(log_paths))
}

/// Estimate return statistics from a price series and simulate forward
/// from its last close.
///
/// Equivalent to [`estimate`] followed by [`simulate`] anchored at
/// `prices.last_close()`; the single entry point used by the dashboard,
/// indicator and scan call sites.
///
/// # Errors
///
/// Propagates [`RondaError::InsufficientData`] from estimation untouched,
/// and [`RondaError::InvalidConfig`] from the simulator.
pub fn simulate_history<R: Rng>(
    prices: &PriceSeries,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulatedPaths> {
    let stats = estimate(prices, config.window_size)?;
    let current_price = prices
        .last_close()
        .ok_or_else(|| RondaError::InsufficientData("empty price series".to_string()))?;
    simulate(current_price, stats, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ronda_traits::Date;

    fn series(closes: &[f64]) -> PriceSeries {
        let dates: Vec<Date> = (0..closes.len())
            .map(|i| Date::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64))
            .collect();
        PriceSeries::new(dates, closes.to_vec()).unwrap()
    }

    fn test_stats() -> ReturnStatistics {
        ReturnStatistics {
            mean_annualized: 0.08,
            std_annualized: 0.25,
        }
    }

    fn config(paths: usize, days: usize) -> SimulationConfig {
        SimulationConfig {
            simulation_paths: paths,
            horizon_days: days,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_output_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let paths = simulate(100.0, test_stats(), &config(20, 15), &mut rng).unwrap();
        assert_eq!(paths.num_paths(), 20);
        assert_eq!(paths.horizon_days(), 15);
        assert_eq!(paths.terminal_prices().len(), 20);
    }

    #[test]
    fn test_all_prices_positive_and_finite() {
        let mut rng = StdRng::seed_from_u64(2);
        let paths = simulate(50.0, test_stats(), &config(200, 50), &mut rng).unwrap();
        assert!(paths.matrix().iter().all(|&p| p > 0.0 && p.is_finite()));
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let cfg = config(64, 32);
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        let a = simulate(123.45, test_stats(), &cfg, &mut rng_a).unwrap();
        let b = simulate(123.45, test_stats(), &cfg, &mut rng_b).unwrap();

        // Bit-identical, not merely close.
        assert_eq!(a, b);
    }

    #[test]
    fn test_scale_invariance() {
        let cfg = config(8, 12);
        let mut rng = StdRng::seed_from_u64(11);
        let draws = Array2::from_shape_simple_fn((8, 12), || StandardNormal.sample(&mut rng));

        let base = simulate_with_draws(100.0, test_stats(), &cfg, draws.clone()).unwrap();
        let doubled = simulate_with_draws(200.0, test_stats(), &cfg, draws).unwrap();

        for (x, y) in base.matrix().iter().zip(doubled.matrix().iter()) {
            assert_eq!(*y, 2.0 * *x);
        }
    }

    #[test]
    fn test_zero_diffusion_fixture() {
        // Prices [100, 101, 99, 102, 98, 103], window 5, all-zero draws,
        // two days at dt = 1/252: the path is pure drift.
        let prices = series(&[100.0, 101.0, 99.0, 102.0, 98.0, 103.0]);
        let stats = estimate(&prices, 5).unwrap();
        let cfg = SimulationConfig {
            simulation_paths: 1,
            horizon_days: 2,
            time_step: 1.0 / 252.0,
            window_size: 5,
        };

        let draws = Array2::zeros((1, 2));
        let paths = simulate_with_draws(103.0, stats, &cfg, draws).unwrap();

        let drift =
            (stats.mean_annualized - 0.5 * stats.std_annualized.powi(2)) / 252.0;
        assert_relative_eq!(paths.matrix()[[0, 0]], 103.0 * drift.exp(), epsilon = 1e-12);
        assert_relative_eq!(
            paths.matrix()[[0, 1]],
            103.0 * (2.0 * drift).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut rng = StdRng::seed_from_u64(3);

        let result = simulate(100.0, test_stats(), &config(0, 10), &mut rng);
        assert!(matches!(result, Err(RondaError::InvalidConfig(_))));

        let result = simulate(100.0, test_stats(), &config(10, 0), &mut rng);
        assert!(matches!(result, Err(RondaError::InvalidConfig(_))));

        let bad_dt = SimulationConfig {
            time_step: 0.0,
            ..config(10, 10)
        };
        let result = simulate(100.0, test_stats(), &bad_dt, &mut rng);
        assert!(matches!(result, Err(RondaError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_anchor_price_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        for price in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = simulate(price, test_stats(), &config(5, 5), &mut rng);
            assert!(matches!(result, Err(RondaError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_draw_shape_mismatch_rejected() {
        let draws = Array2::zeros((3, 4));
        let result = simulate_with_draws(100.0, test_stats(), &config(5, 4), draws);
        assert!(matches!(result, Err(RondaError::InvalidConfig(_))));
    }

    #[test]
    fn test_simulate_history_end_to_end() {
        let prices = series(&[100.0, 101.0, 99.0, 102.0, 98.0, 103.0]);
        let cfg = SimulationConfig {
            window_size: 4,
            ..config(16, 8)
        };
        let mut rng = StdRng::seed_from_u64(5);
        let paths = simulate_history(&prices, &cfg, &mut rng).unwrap();
        assert_eq!(paths.num_paths(), 16);
        assert!(paths.matrix().iter().all(|&p| p > 0.0));
    }

    #[test]
    fn test_simulate_history_propagates_insufficient_data() {
        let prices = series(&[100.0, 101.0]);
        let cfg = SimulationConfig {
            window_size: 30,
            ..config(16, 8)
        };
        let mut rng = StdRng::seed_from_u64(6);
        let result = simulate_history(&prices, &cfg, &mut rng);
        assert!(matches!(result, Err(RondaError::InsufficientData(_))));
    }
}
