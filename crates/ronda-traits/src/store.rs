//! The price-store boundary.
//!
//! Loading and validating historical prices happens outside the
//! simulation core; this trait is the seam between the two. Implementors
//! live in `ronda-store` (CSV directory, in-memory fixtures), and the
//! scan orchestrator only ever sees `&dyn PriceStore`.

use crate::error::Result;
use crate::series::{PriceSeries, Symbol};

/// A read-only source of historical closing prices keyed by ticker.
///
/// Implementations must be shareable across the scan worker pool, hence
/// the `Send + Sync` bound. All I/O completes inside `load_prices`; the
/// simulation core itself never performs I/O.
pub trait PriceStore: Send + Sync {
    /// Load the full time-ordered price history for a ticker.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::TickerNotFound`](crate::RondaError::TickerNotFound)
    /// for an unknown ticker, or
    /// [`RondaError::InvalidData`](crate::RondaError::InvalidData) when the
    /// stored history violates the [`PriceSeries`] invariants.
    fn load_prices(&self, ticker: &str) -> Result<PriceSeries>;

    /// All tickers available in this store, in unspecified order.
    fn tickers(&self) -> Result<Vec<Symbol>>;
}
