//! Terminal-distribution reduction: percentiles, mean and Value-at-Risk.
//!
//! Every consumer of a simulation (dashboard, indicator thresholds, the
//! full-market scan) reduces the same way through [`summarize`]; the
//! call sites differ only in which percentile ranks they request and the
//! VaR confidence level.

use ronda_traits::stats::{mean, percentile_of_sorted, sorted_ascending};
use ronda_traits::{Result, RondaError};
use serde::{Deserialize, Serialize};

use crate::simulate::SimulatedPaths;

/// Distributional risk metrics over the terminal prices of one
/// simulation run.
///
/// All fields are derived from a single [`SimulatedPaths`] matrix; no
/// resampling happens between the mean, the percentiles and the VaR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Last-day simulated price of every path.
    pub terminal_prices: Vec<f64>,
    /// Arithmetic mean of the terminal prices.
    pub mean: f64,
    /// Requested (rank, price) percentile pairs, ascending by rank.
    pub percentiles: Vec<(f64, f64)>,
    /// Signed Value-at-Risk: the tail percentile of
    /// `terminal − current_price`. Typically negative (a loss); positive
    /// when the whole distribution sits above the anchor price.
    pub value_at_risk: f64,
    /// `value_at_risk` as a percentage of the anchor price.
    pub value_at_risk_pct: f64,
}

impl RiskSummary {
    /// Look up the price at a requested percentile rank.
    ///
    /// Returns `None` when `rank` was not part of the requested set.
    pub fn percentile(&self, rank: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|(r, _)| *r == rank)
            .map(|(_, price)| *price)
    }
}

/// Reduce the terminal prices of a simulation into a [`RiskSummary`].
///
/// Percentiles use linear interpolation between order statistics over
/// the last-day prices of every path. `value_at_risk` is the
/// `100 × (1 − confidence_level)`-th percentile of the signed
/// distribution `terminal − current_price`, and is deliberately not
/// clamped: a distribution entirely above the anchor yields a positive
/// VaR (a gain floor).
///
/// # Errors
///
/// Returns [`RondaError::InvalidConfig`] when `confidence_level` is
/// outside `(0, 1)`, the paths matrix is empty, the anchor price is not
/// positive and finite, or a requested rank falls outside `[0, 100]`.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use ronda_gbm::{ReturnStatistics, SimulationConfig, simulate, summarize};
///
/// let stats = ReturnStatistics { mean_annualized: 0.05, std_annualized: 0.2 };
/// let config = SimulationConfig { simulation_paths: 500, horizon_days: 21, ..Default::default() };
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let paths = simulate(100.0, stats, &config, &mut rng).unwrap();
/// let summary = summarize(&paths, 100.0, 0.95, &[20.0, 80.0]).unwrap();
///
/// assert!(summary.percentile(20.0).unwrap() <= summary.percentile(80.0).unwrap());
/// ```
pub fn summarize(
    paths: &SimulatedPaths,
    current_price: f64,
    confidence_level: f64,
    ranks: &[f64],
) -> Result<RiskSummary> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(RondaError::InvalidConfig(format!(
            "confidence level must be in (0, 1), got {confidence_level}"
        )));
    }
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(RondaError::InvalidConfig(format!(
            "current price must be positive and finite, got {current_price}"
        )));
    }
    for &rank in ranks {
        if !rank.is_finite() || !(0.0..=100.0).contains(&rank) {
            return Err(RondaError::InvalidConfig(format!(
                "percentile rank must be in [0, 100], got {rank}"
            )));
        }
    }

    let terminal_prices = paths.terminal_prices();
    if terminal_prices.is_empty() {
        return Err(RondaError::InvalidConfig(
            "cannot summarize an empty simulation".to_string(),
        ));
    }

    let sorted = sorted_ascending(&terminal_prices);

    let mut percentiles: Vec<(f64, f64)> = ranks
        .iter()
        .map(|&rank| (rank, percentile_of_sorted(&sorted, rank)))
        .collect();
    percentiles.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    // Signed loss distribution over the same paths; subtracting the
    // anchor preserves the sort order.
    let losses: Vec<f64> = sorted.iter().map(|price| price - current_price).collect();
    let tail_rank = 100.0 * (1.0 - confidence_level);
    let value_at_risk = percentile_of_sorted(&losses, tail_rank);
    let value_at_risk_pct = value_at_risk / current_price * 100.0;

    Ok(RiskSummary {
        mean: mean(&terminal_prices),
        terminal_prices,
        percentiles,
        value_at_risk,
        value_at_risk_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate::SimulatedPaths;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    fn paths_with_terminals(terminals: &[f64]) -> SimulatedPaths {
        // Two-day paths where the first day is a constant placeholder;
        // only the last column feeds the summary.
        let mut rows = Vec::with_capacity(terminals.len() * 2);
        for &t in terminals {
            rows.push(1.0);
            rows.push(t);
        }
        SimulatedPaths::from_matrix(
            Array2::from_shape_vec((terminals.len(), 2), rows).unwrap(),
        )
    }

    #[test]
    fn test_mean_and_terminals() {
        let paths = paths_with_terminals(&[90.0, 100.0, 110.0]);
        let summary = summarize(&paths, 100.0, 0.95, &[]).unwrap();
        assert_relative_eq!(summary.mean, 100.0);
        assert_eq!(summary.terminal_prices, vec![90.0, 100.0, 110.0]);
    }

    #[test]
    fn test_percentiles_monotone_in_rank() {
        let paths = paths_with_terminals(&[104.0, 97.0, 101.0, 93.0, 108.0, 99.0, 102.0]);
        let ranks: Vec<f64> = (0..=20).map(|k| (k * 5) as f64).collect();
        let summary = summarize(&paths, 100.0, 0.95, &ranks).unwrap();

        for pair in summary.percentiles.windows(2) {
            assert!(pair[0].1 <= pair[1].1, "percentiles must be monotone");
        }
    }

    #[test]
    fn test_rank_endpoints_are_min_and_max() {
        let paths = paths_with_terminals(&[104.0, 97.0, 108.0, 93.0]);
        let summary = summarize(&paths, 100.0, 0.95, &[0.0, 100.0]).unwrap();
        assert_relative_eq!(summary.percentile(0.0).unwrap(), 93.0);
        assert_relative_eq!(summary.percentile(100.0).unwrap(), 108.0);
    }

    #[test]
    fn test_var_literal_percentile() {
        // Losses sorted: [-10, -5, 0, 5, 10]; the 5th percentile sits 20%
        // of the way from -10 to -5.
        let paths = paths_with_terminals(&[90.0, 95.0, 100.0, 105.0, 110.0]);
        let summary = summarize(&paths, 100.0, 0.95, &[]).unwrap();
        assert_relative_eq!(summary.value_at_risk, -9.0, epsilon = 1e-12);
        assert_relative_eq!(summary.value_at_risk_pct, -9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_var_positive_when_distribution_above_anchor() {
        let paths = paths_with_terminals(&[101.0, 102.0, 103.0, 104.0, 105.0]);
        let summary = summarize(&paths, 100.0, 0.95, &[]).unwrap();
        // 5th percentile of [1, 2, 3, 4, 5] is 1.2: a gain floor, not a loss.
        assert_relative_eq!(summary.value_at_risk, 1.2, epsilon = 1e-12);
        assert!(summary.value_at_risk > 0.0);
    }

    #[test]
    fn test_confidence_level_bounds() {
        let paths = paths_with_terminals(&[90.0, 110.0]);
        for level in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let result = summarize(&paths, 100.0, level, &[]);
            assert!(matches!(result, Err(RondaError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_rank_out_of_range_rejected() {
        let paths = paths_with_terminals(&[90.0, 110.0]);
        let result = summarize(&paths, 100.0, 0.95, &[101.0]);
        assert!(matches!(result, Err(RondaError::InvalidConfig(_))));

        let result = summarize(&paths, 100.0, 0.95, &[-1.0]);
        assert!(matches!(result, Err(RondaError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_simulation_rejected() {
        let paths = SimulatedPaths::from_matrix(Array2::zeros((0, 0)));
        let result = summarize(&paths, 100.0, 0.95, &[]);
        assert!(matches!(result, Err(RondaError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_anchor_rejected() {
        let paths = paths_with_terminals(&[90.0, 110.0]);
        for price in [0.0, -1.0, f64::NAN] {
            let result = summarize(&paths, price, 0.95, &[]);
            assert!(matches!(result, Err(RondaError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_percentile_lookup_miss() {
        let paths = paths_with_terminals(&[90.0, 110.0]);
        let summary = summarize(&paths, 100.0, 0.95, &[20.0]).unwrap();
        assert!(summary.percentile(20.0).is_some());
        assert!(summary.percentile(80.0).is_none());
    }
}
