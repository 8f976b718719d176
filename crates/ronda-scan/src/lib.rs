//! Parallel full-market scan orchestration.
//!
//! Iterates every ticker in a price store, runs the
//! estimate → simulate → summarize pipeline from `ronda-gbm` on each,
//! and collects a deterministically ordered report of percentile
//! screens and Value-at-Risk figures. The pipeline per ticker is
//! embarrassingly parallel, so workers fan out over rayon; a
//! [`CancellationToken`] lets an interactive caller abort mid-batch.
//!
//! # Example
//!
//! ```no_run
//! use ronda_scan::{CancellationToken, ScanConfig, scan};
//! use ronda_store::CsvPriceStore;
//! use ronda_traits::PriceStore;
//!
//! # fn main() -> ronda_traits::Result<()> {
//! let store = CsvPriceStore::new("data/prices");
//! let tickers = store.tickers()?;
//!
//! let report = scan(
//!     &store,
//!     &tickers,
//!     &ScanConfig::default(),
//!     &CancellationToken::new(),
//! )?;
//!
//! for row in &report.rows {
//!     println!("{}: {:+.2}%", row.ticker, row.pct_diff);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod scan;

pub use cancel::CancellationToken;
pub use scan::{ScanConfig, ScanReport, ScanRow, SkippedTicker, scan};
