//! Historical price containers.
//!
//! [`PriceSeries`] is the only input the simulation core ever sees: an
//! ordered sequence of (date, close) observations validated once at
//! construction. The core borrows a read-only view and never mutates it,
//! so a series can be shared freely across concurrent simulations.

use crate::error::{Result, RondaError};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market ticker identifier, e.g. "AAPL" or "CRSP".
pub type Symbol = String;

/// An ordered series of daily closing prices for a single instrument.
///
/// Invariants, enforced at construction:
///
/// - dates are strictly increasing (no duplicates),
/// - every close is finite and strictly positive,
/// - dates and closes have equal length.
///
/// # Example
///
/// ```
/// use ronda_traits::{Date, PriceSeries};
///
/// let series = PriceSeries::new(
///     vec![
///         Date::from_ymd_opt(2024, 1, 2).unwrap(),
///         Date::from_ymd_opt(2024, 1, 3).unwrap(),
///     ],
///     vec![101.5, 102.25],
/// )
/// .unwrap();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.last_close(), Some(102.25));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    dates: Vec<Date>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Creates a new series from parallel date and close vectors.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidData`] if the vectors differ in
    /// length, the dates are not strictly increasing, or any close is
    /// non-finite or not strictly positive.
    pub fn new(dates: Vec<Date>, closes: Vec<f64>) -> Result<Self> {
        if dates.len() != closes.len() {
            return Err(RondaError::InvalidData(format!(
                "{} dates but {} closes",
                dates.len(),
                closes.len()
            )));
        }

        for window in dates.windows(2) {
            if window[1] <= window[0] {
                return Err(RondaError::InvalidData(format!(
                    "dates not strictly increasing at {}",
                    window[1]
                )));
            }
        }

        for (date, close) in dates.iter().zip(&closes) {
            if !close.is_finite() || *close <= 0.0 {
                return Err(RondaError::InvalidData(format!(
                    "non-positive close {} at {}",
                    close, date
                )));
            }
        }

        Ok(Self { dates, closes })
    }

    /// Creates a series from (date, close) pairs.
    ///
    /// # Errors
    ///
    /// Same validation as [`PriceSeries::new`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Date, f64)>,
    {
        let (dates, closes) = pairs.into_iter().unzip();
        Self::new(dates, closes)
    }

    /// Number of observations in the series.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// The observation dates, oldest first.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The closing prices, oldest first.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// The most recent closing price, if any.
    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// The most recent observation date, if any.
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// The trailing `n` closes (the whole series when `n >= len`).
    pub fn tail_closes(&self, n: usize) -> &[f64] {
        let start = self.closes.len().saturating_sub(n);
        &self.closes[start..]
    }
}
