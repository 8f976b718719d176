//! Store and ticker-list helpers for the Ronda CLI.

use std::path::Path;

use anyhow::{Context, Result, bail};
use ronda_store::{CsvPriceStore, filter_tickers, load_universe};
use ronda_traits::{PriceStore, Symbol};

/// Open the CSV price store rooted at `data`.
pub(crate) fn open_store(data: &Path) -> CsvPriceStore {
    CsvPriceStore::new(data)
}

/// Resolve the ticker list, optionally restricted to a brokerage
/// universe file.
pub(crate) fn resolve_tickers(
    store: &CsvPriceStore,
    universe: Option<&Path>,
) -> Result<Vec<Symbol>> {
    let tickers = store
        .tickers()
        .with_context(|| format!("listing tickers in {}", store.root().display()))?;

    match universe {
        Some(path) => {
            let universe = load_universe(path)
                .with_context(|| format!("loading universe from {}", path.display()))?;
            Ok(filter_tickers(&tickers, &universe))
        }
        None => Ok(tickers),
    }
}

/// Validate an output-format argument.
pub(crate) fn parse_format(format: &str) -> Result<OutputFormat> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown format '{other}', expected 'text' or 'json'"),
    }
}

/// Output format for CLI reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}
