//! Annualized return estimation from a trailing price window.

use ronda_traits::stats::{TRADING_DAYS_PER_YEAR, mean, sample_std, simple_returns};
use ronda_traits::{PriceSeries, Result, RondaError};
use serde::{Deserialize, Serialize};

/// Annualized drift and volatility estimated from historical returns.
///
/// Ephemeral by design: computed fresh on every estimation call and
/// consumed immediately by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatistics {
    /// Mean daily simple return scaled by 252 trading days.
    pub mean_annualized: f64,
    /// Sample standard deviation of daily simple returns scaled by √252.
    pub std_annualized: f64,
}

/// Estimate annualized return statistics from the trailing window of a
/// price series.
///
/// Takes the most recent `window_size + 1` closes so that exactly
/// `window_size` simple period-over-period returns are available, then
/// annualizes the sample mean by [`TRADING_DAYS_PER_YEAR`] and the sample
/// standard deviation by its square root.
///
/// Pure function of its inputs; the series is only borrowed.
///
/// # Errors
///
/// - [`RondaError::InvalidConfig`] when `window_size < 2` (a single
///   return has no sample standard deviation).
/// - [`RondaError::InsufficientData`] when the series holds fewer than
///   `window_size + 1` observations, or the computed standard deviation
///   is not finite.
///
/// # Example
///
/// ```
/// use ronda_traits::{Date, PriceSeries};
/// use ronda_gbm::estimate;
///
/// let dates: Vec<Date> = (1..=4)
///     .map(|d| Date::from_ymd_opt(2024, 3, d).unwrap())
///     .collect();
/// let series = PriceSeries::new(dates, vec![100.0, 102.0, 101.0, 103.0]).unwrap();
///
/// let stats = estimate(&series, 3).unwrap();
/// assert!(stats.std_annualized > 0.0);
/// ```
pub fn estimate(prices: &PriceSeries, window_size: usize) -> Result<ReturnStatistics> {
    if window_size < 2 {
        return Err(RondaError::InvalidConfig(format!(
            "window size must be at least 2, got {window_size}"
        )));
    }
    if prices.len() < window_size + 1 {
        return Err(RondaError::InsufficientData(format!(
            "a {window_size}-day window needs {} prices, have {}",
            window_size + 1,
            prices.len()
        )));
    }

    let window = prices.tail_closes(window_size + 1);
    let returns = simple_returns(window);

    let daily_mean = mean(&returns);
    let daily_std = sample_std(&returns);

    if !daily_mean.is_finite() || !daily_std.is_finite() {
        return Err(RondaError::InsufficientData(format!(
            "return statistics are undefined over a {window_size}-day window"
        )));
    }

    Ok(ReturnStatistics {
        mean_annualized: daily_mean * TRADING_DAYS_PER_YEAR,
        std_annualized: daily_std * TRADING_DAYS_PER_YEAR.sqrt(),
    })
}
