//! Simulate command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ronda_gbm::{SimulationConfig, estimate, simulate, summarize};
use ronda_traits::PriceStore;
use serde_json::json;

use crate::data::{self, OutputFormat};

/// Low/high percentile ranks shown alongside the VaR figures.
const LOW_RANK: f64 = 20.0;
const HIGH_RANK: f64 = 80.0;

#[allow(clippy::too_many_arguments)]
pub(crate) fn run_simulate(
    ticker: &str,
    data_dir: &Path,
    window: usize,
    paths: usize,
    horizon: usize,
    confidence: f64,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    let format = data::parse_format(format)?;
    let store = data::open_store(data_dir);

    let prices = store.load_prices(ticker)?;
    let current_price = prices
        .last_close()
        .context("price history is empty")?;

    let config = SimulationConfig {
        simulation_paths: paths,
        horizon_days: horizon,
        window_size: window,
        ..SimulationConfig::default()
    };

    let stats = estimate(&prices, config.window_size)?;
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let simulated = simulate(current_price, stats, &config, &mut rng)?;
    let summary = summarize(&simulated, current_price, confidence, &[LOW_RANK, HIGH_RANK])?;

    let low = summary.percentile(LOW_RANK).unwrap_or(f64::NAN);
    let high = summary.percentile(HIGH_RANK).unwrap_or(f64::NAN);
    let confidence_pct = confidence * 100.0;

    match format {
        OutputFormat::Json => {
            let output = json!({
                "ticker": ticker,
                "observations": prices.len(),
                "window_size": window,
                "simulation_paths": paths,
                "horizon_days": horizon,
                "current_price": current_price,
                "mean_annualized": stats.mean_annualized,
                "std_annualized": stats.std_annualized,
                "mean_terminal_price": summary.mean,
                "percentile_low": { "rank": LOW_RANK, "price": low },
                "percentile_high": { "rank": HIGH_RANK, "price": high },
                "confidence_level": confidence,
                "value_at_risk": summary.value_at_risk,
                "value_at_risk_pct": summary.value_at_risk_pct,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("\n╔══════════════════════════════════════════════════════════════╗");
            println!("║                     GBM simulation                           ║");
            println!("╚══════════════════════════════════════════════════════════════╝\n");

            println!("Ticker:    {}", ticker);
            println!("History:   {} observations (window {})", prices.len(), window);
            println!("Paths:     {} × {} days", paths, horizon);
            println!();
            println!("Annualized drift:      {:>10.4}", stats.mean_annualized);
            println!("Annualized volatility: {:>10.4}", stats.std_annualized);
            println!();
            println!("Current price:         {:>10.2}", current_price);
            println!("Mean simulated price:  {:>10.2}", summary.mean);
            println!("{:.0}th percentile:       {:>10.2}", LOW_RANK, low);
            println!("{:.0}th percentile:       {:>10.2}", HIGH_RANK, high);
            println!(
                "VaR ({confidence_pct:.0}%):             {:>10.2}  ({:+.2}%)",
                summary.value_at_risk, summary.value_at_risk_pct
            );
            println!();
        }
    }

    Ok(())
}
