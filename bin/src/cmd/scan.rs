//! Scan command implementation.

use std::path::Path;

use anyhow::Result;
use ronda_gbm::SimulationConfig;
use ronda_scan::{CancellationToken, ScanConfig, scan};

use crate::data::{self, OutputFormat};

#[allow(clippy::too_many_arguments)]
pub(crate) fn run_scan(
    data_dir: &Path,
    universe: Option<&Path>,
    window: usize,
    paths: usize,
    horizon: usize,
    confidence: f64,
    rank: f64,
    seed: Option<u64>,
    limit: Option<usize>,
    format: &str,
) -> Result<()> {
    let format = data::parse_format(format)?;
    let store = data::open_store(data_dir);
    let tickers = data::resolve_tickers(&store, universe)?;

    let config = ScanConfig {
        simulation: SimulationConfig {
            simulation_paths: paths,
            horizon_days: horizon,
            window_size: window,
            ..SimulationConfig::default()
        },
        confidence_level: confidence,
        reference_rank: rank,
        seed,
    };

    let token = CancellationToken::new();
    let report = scan(&store, &tickers, &config, &token)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("\n╔══════════════════════════════════════════════════════════════╗");
            println!("║                      Market scan                             ║");
            println!("╚══════════════════════════════════════════════════════════════╝\n");

            println!(
                "Scanned {} tickers ({} paths × {} days, window {}, rank {:.0})",
                tickers.len(),
                paths,
                horizon,
                window,
                rank
            );
            println!();
            println!(
                "{:<8} {:>10} {:>12} {:>9} {:>12} {:>10}",
                "Ticker", "Close", "P(rank)", "Diff %", "Mean", "VaR %"
            );

            let shown = limit.unwrap_or(report.rows.len());
            for row in report.rows.iter().take(shown) {
                println!(
                    "{:<8} {:>10.2} {:>12.2} {:>+9.2} {:>12.2} {:>+10.2}",
                    row.ticker,
                    row.current_price,
                    row.reference_price,
                    row.pct_diff,
                    row.mean_terminal_price,
                    row.value_at_risk_pct
                );
            }

            if report.rows.len() > shown {
                println!("... {} more rows", report.rows.len() - shown);
            }
            if !report.skipped.is_empty() {
                println!();
                println!("Skipped {} tickers:", report.skipped.len());
                for skip in &report.skipped {
                    println!("  {:<8} {}", skip.ticker, skip.reason);
                }
            }
            println!();
        }
    }

    Ok(())
}
