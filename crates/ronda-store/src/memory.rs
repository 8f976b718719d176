//! In-memory price store for tests and embedding.

use std::collections::HashMap;

use ronda_traits::{PriceSeries, PriceStore, Result, RondaError, Symbol};

/// A `HashMap`-backed price store.
///
/// Useful as a test fixture and for callers that already hold price
/// histories in memory (e.g. a dashboard that loaded them once at
/// startup).
///
/// # Example
///
/// ```
/// use ronda_store::MemoryPriceStore;
/// use ronda_traits::{Date, PriceSeries, PriceStore};
///
/// let series = PriceSeries::new(
///     vec![
///         Date::from_ymd_opt(2024, 1, 2).unwrap(),
///         Date::from_ymd_opt(2024, 1, 3).unwrap(),
///     ],
///     vec![10.0, 10.5],
/// )
/// .unwrap();
///
/// let mut store = MemoryPriceStore::new();
/// store.insert("ABC", series);
///
/// assert_eq!(store.tickers().unwrap(), vec!["ABC".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPriceStore {
    series: HashMap<Symbol, PriceSeries>,
}

impl MemoryPriceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a ticker's price history.
    pub fn insert(&mut self, ticker: impl Into<Symbol>, prices: PriceSeries) {
        let _ = self.series.insert(ticker.into(), prices);
    }

    /// Number of tickers held.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the store holds no tickers.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl PriceStore for MemoryPriceStore {
    fn load_prices(&self, ticker: &str) -> Result<PriceSeries> {
        self.series
            .get(ticker)
            .cloned()
            .ok_or_else(|| RondaError::TickerNotFound(ticker.to_string()))
    }

    fn tickers(&self) -> Result<Vec<Symbol>> {
        let mut tickers: Vec<Symbol> = self.series.keys().cloned().collect();
        tickers.sort();
        Ok(tickers)
    }
}
