//! Statistical helpers shared by the estimation and risk crates.
//!
//! These are the primitives behind every number the toolkit reports:
//! sample moments with Bessel's correction and linearly interpolated
//! percentiles over order statistics. Keeping them in one place
//! guarantees that every call site annualizes and ranks the same way.

/// Trading days per year used for annualization throughout the toolkit.
///
/// Annualized mean return = daily mean × 252; annualized volatility =
/// daily std × √252. Every consumer must go through this constant.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Arithmetic mean of a slice.
///
/// Returns `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N−1 denominator).
///
/// Returns `NaN` when fewer than two values are available, matching the
/// undefined sample variance of a single observation.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Simple period-over-period returns: `r_i = p_i / p_{i-1} - 1`.
///
/// The first (undefined) entry is discarded, so `n` prices yield `n - 1`
/// returns.
///
/// # Example
///
/// ```
/// use ronda_traits::stats::simple_returns;
///
/// let returns = simple_returns(&[100.0, 110.0, 99.0]);
/// assert_eq!(returns.len(), 2);
/// assert!((returns[0] - 0.10).abs() < 1e-12);
/// assert!((returns[1] + 0.10).abs() < 1e-12);
/// ```
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// The `rank`-th percentile (0–100) of an ascending-sorted slice, with
/// linear interpolation between order statistics.
///
/// Ranks outside `[0, 100]` are clamped. Returns `NaN` for an empty
/// slice.
///
/// # Example
///
/// ```
/// use ronda_traits::stats::percentile_of_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_of_sorted(&sorted, 0.0), 1.0);
/// assert_eq!(percentile_of_sorted(&sorted, 100.0), 4.0);
/// assert_eq!(percentile_of_sorted(&sorted, 50.0), 2.5);
/// ```
pub fn percentile_of_sorted(sorted: &[f64], rank: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = rank.clamp(0.0, 100.0);
    let position = rank / 100.0 * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Ascending-sorted copy of a slice.
///
/// NaN values sort last; the percentile helpers assume the caller has
/// already filtered them out.
pub fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    }

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_std_basic() {
        // Variance of [2, 4, 4, 4, 5, 5, 7, 9] with N-1 denominator is 32/7.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sample_std(&values), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_sample_std_single_value_undefined() {
        assert!(sample_std(&[42.0]).is_nan());
        assert!(sample_std(&[]).is_nan());
    }

    #[test]
    fn test_simple_returns() {
        let returns = simple_returns(&[100.0, 101.0, 99.0, 102.0]);
        assert_eq!(returns.len(), 3);
        assert_relative_eq!(returns[0], 0.01, epsilon = 1e-12);
        assert_relative_eq!(returns[1], 99.0 / 101.0 - 1.0, epsilon = 1e-12);
        assert_relative_eq!(returns[2], 102.0 / 99.0 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simple_returns_too_short() {
        assert!(simple_returns(&[100.0]).is_empty());
        assert!(simple_returns(&[]).is_empty());
    }

    #[test]
    fn test_percentile_endpoints() {
        let sorted = [10.0, 20.0, 30.0];
        assert_relative_eq!(percentile_of_sorted(&sorted, 0.0), 10.0);
        assert_relative_eq!(percentile_of_sorted(&sorted, 100.0), 30.0);
    }

    #[test]
    fn test_percentile_interpolation() {
        // Position of the 25th percentile over 5 points is exactly index 1.
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(percentile_of_sorted(&sorted, 25.0), 2.0);
        // Rank 10 falls 40% of the way between index 0 and 1.
        assert_relative_eq!(percentile_of_sorted(&sorted, 10.0), 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_relative_eq!(percentile_of_sorted(&[7.0], 35.0), 7.0);
    }

    #[test]
    fn test_percentile_empty() {
        assert!(percentile_of_sorted(&[], 50.0).is_nan());
    }

    #[test]
    fn test_percentile_clamps_rank() {
        let sorted = [1.0, 2.0];
        assert_relative_eq!(percentile_of_sorted(&sorted, -10.0), 1.0);
        assert_relative_eq!(percentile_of_sorted(&sorted, 150.0), 2.0);
    }

    #[test]
    fn test_sorted_ascending() {
        let sorted = sorted_ascending(&[3.0, 1.0, 2.0]);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
    }
}
