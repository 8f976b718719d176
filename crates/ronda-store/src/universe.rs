//! Brokerage-availability universe filter.
//!
//! A scan usually only covers instruments the user's brokerage can
//! actually trade. The universe file is a CSV export with an
//! `act_symbol` column (extra columns are ignored); tickers absent from
//! it are filtered out before the scan starts.

use std::collections::HashSet;
use std::path::Path;

use ronda_traits::{Result, RondaError, Symbol};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct UniverseRow {
    act_symbol: Symbol,
}

/// Load the set of available symbols from a brokerage universe CSV.
///
/// # Errors
///
/// Returns [`RondaError::InvalidData`] when the file cannot be opened or
/// a row cannot be parsed (including a missing `act_symbol` column).
pub fn load_universe(path: impl AsRef<Path>) -> Result<HashSet<Symbol>> {
    let path = path.as_ref();
    let mut reader = ::csv::Reader::from_path(path)
        .map_err(|e| RondaError::InvalidData(format!("{}: {e}", path.display())))?;

    let mut symbols = HashSet::new();
    for row in reader.deserialize() {
        let row: UniverseRow =
            row.map_err(|e| RondaError::InvalidData(format!("{}: {e}", path.display())))?;
        let _ = symbols.insert(row.act_symbol);
    }
    Ok(symbols)
}

/// Keep only the tickers present in the universe, preserving order.
#[must_use]
pub fn filter_tickers(tickers: &[Symbol], universe: &HashSet<Symbol>) -> Vec<Symbol> {
    tickers
        .iter()
        .filter(|ticker| universe.contains(*ticker))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(label: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ronda-universe-{label}-{}.csv",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_universe_with_extra_columns() {
        let path = temp_file(
            "extra",
            "act_symbol,security_name,exchange\nAAA,Alpha Co,NYSE\nBBB,Beta Inc,NASDAQ\n",
        );
        let universe = load_universe(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(universe.len(), 2);
        assert!(universe.contains("AAA"));
        assert!(universe.contains("BBB"));
    }

    #[test]
    fn test_load_universe_missing_file() {
        let result = load_universe("/nonexistent/universe.csv");
        assert!(matches!(result, Err(RondaError::InvalidData(_))));
    }

    #[test]
    fn test_load_universe_missing_column() {
        let path = temp_file("nocol", "symbol\nAAA\n");
        let result = load_universe(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(RondaError::InvalidData(_))));
    }

    #[test]
    fn test_filter_tickers_preserves_order() {
        let universe: HashSet<Symbol> =
            ["CCC", "AAA"].iter().map(|s| s.to_string()).collect();
        let tickers: Vec<Symbol> = ["AAA", "BBB", "CCC"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let filtered = filter_tickers(&tickers, &universe);
        assert_eq!(filtered, vec!["AAA".to_string(), "CCC".to_string()]);
    }
}
