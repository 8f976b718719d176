//! CSV-backed price store: one `<TICKER>.csv` file per instrument.

use std::fs;
use std::path::{Path, PathBuf};

use ronda_traits::{Date, PriceSeries, PriceStore, Result, RondaError, Symbol};
use serde::Deserialize;
use tracing::debug;

/// One row of a per-ticker price file.
#[derive(Debug, Deserialize)]
struct PriceRow {
    date: Date,
    close: f64,
}

/// A directory of per-ticker CSV price files.
///
/// Each ticker's history lives in `<root>/<TICKER>.csv` with a
/// `date,close` header, ISO dates, oldest first. Files are read in full
/// on every `load_prices` call and validated into a [`PriceSeries`];
/// the store keeps no connection or cache state.
///
/// # Example
///
/// ```no_run
/// use ronda_store::CsvPriceStore;
/// use ronda_traits::PriceStore;
///
/// let store = CsvPriceStore::new("data/prices");
/// let prices = store.load_prices("CRSP")?;
/// println!("{} observations", prices.len());
/// # Ok::<(), ronda_traits::RondaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvPriceStore {
    root: PathBuf,
}

impl CsvPriceStore {
    /// Create a store over a directory of `<TICKER>.csv` files.
    ///
    /// The directory is not touched until the first load or listing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, ticker: &str) -> PathBuf {
        self.root.join(format!("{ticker}.csv"))
    }
}

impl PriceStore for CsvPriceStore {
    fn load_prices(&self, ticker: &str) -> Result<PriceSeries> {
        let path = self.path_for(ticker);
        if !path.is_file() {
            return Err(RondaError::TickerNotFound(ticker.to_string()));
        }

        debug!(ticker, path = %path.display(), "loading prices");

        let mut reader = ::csv::Reader::from_path(&path)
            .map_err(|e| RondaError::InvalidData(format!("{}: {e}", path.display())))?;

        let mut pairs = Vec::new();
        for row in reader.deserialize() {
            let row: PriceRow =
                row.map_err(|e| RondaError::InvalidData(format!("{}: {e}", path.display())))?;
            pairs.push((row.date, row.close));
        }

        PriceSeries::from_pairs(pairs)
    }

    fn tickers(&self) -> Result<Vec<Symbol>> {
        let mut tickers = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                tickers.push(stem.to_string());
            }
        }
        tickers.sort();
        Ok(tickers)
    }
}
