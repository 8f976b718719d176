//! Tickers command implementation.

use std::path::Path;

use anyhow::Result;

use crate::data;

pub(crate) fn run_tickers(data_dir: &Path, universe: Option<&Path>) -> Result<()> {
    let store = data::open_store(data_dir);
    let tickers = data::resolve_tickers(&store, universe)?;

    println!("{} tickers in {}", tickers.len(), data_dir.display());
    for ticker in &tickers {
        println!("{ticker}");
    }

    Ok(())
}
