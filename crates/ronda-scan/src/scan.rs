//! Full-market scan: estimate, simulate and summarize every ticker.
//!
//! Each ticker's pipeline is fully independent of every other ticker's,
//! so the scan fans out over a rayon worker pool bounded by available
//! cores. Per-ticker failures are recorded and never abort the batch;
//! the final report is deterministically ordered regardless of thread
//! interleaving.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use ronda_gbm::{SimulationConfig, simulate_history, summarize};
use ronda_traits::{PriceStore, Result, RondaError, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cancel::CancellationToken;

/// Configuration for a full-market scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Simulation knobs applied to every ticker.
    pub simulation: SimulationConfig,
    /// Confidence level for the per-ticker Value-at-Risk (default 0.95).
    pub confidence_level: f64,
    /// Percentile rank whose price is compared against the current close
    /// to produce the sort key (default 20: the low-tail screen).
    pub reference_rank: f64,
    /// Optional base seed. When set, each ticker gets a reproducible rng
    /// derived from the seed and the ticker name, so reports are
    /// identical across runs and thread schedules. When unset, draws
    /// come from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                simulation_paths: 2000,
                horizon_days: 30,
                window_size: 180,
                ..SimulationConfig::default()
            },
            confidence_level: 0.95,
            reference_rank: 20.0,
            seed: None,
        }
    }
}

impl ScanConfig {
    /// Validate all scan parameters up front, before any worker spawns.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidConfig`] for invalid simulation
    /// dimensions, a confidence level outside `(0, 1)`, or a reference
    /// rank outside `[0, 100]`.
    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(RondaError::InvalidConfig(format!(
                "confidence level must be in (0, 1), got {}",
                self.confidence_level
            )));
        }
        if !self.reference_rank.is_finite() || !(0.0..=100.0).contains(&self.reference_rank) {
            return Err(RondaError::InvalidConfig(format!(
                "reference rank must be in [0, 100], got {}",
                self.reference_rank
            )));
        }
        Ok(())
    }
}

/// One ticker's scan result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRow {
    /// Ticker symbol.
    pub ticker: Symbol,
    /// Last actual closing price (the simulation anchor).
    pub current_price: f64,
    /// Simulated price at the configured reference percentile rank.
    pub reference_price: f64,
    /// `(reference_price − current_price) / current_price × 100`; the
    /// report's ascending sort key.
    pub pct_diff: f64,
    /// Mean simulated terminal price.
    pub mean_terminal_price: f64,
    /// Signed Value-at-Risk at the configured confidence level.
    pub value_at_risk: f64,
    /// Value-at-Risk as a percentage of the current price.
    pub value_at_risk_pct: f64,
}

/// A ticker that produced no row, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedTicker {
    /// Ticker symbol.
    pub ticker: Symbol,
    /// Human-readable skip reason (load failure, short history, ...).
    pub reason: String,
}

/// The result of a full-market scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Successful rows, ascending by `pct_diff` (ties broken by ticker).
    pub rows: Vec<ScanRow>,
    /// Tickers that failed or produced non-finite results, by ticker.
    pub skipped: Vec<SkippedTicker>,
    /// Whether the scan was cancelled before covering every ticker.
    pub cancelled: bool,
}

enum TickerOutcome {
    Row(ScanRow),
    Skipped(SkippedTicker),
    Cancelled,
}

/// Scan a set of tickers against a price store.
///
/// Workers run the estimate → simulate → summarize pipeline per ticker
/// in parallel. A ticker that fails (unknown, short history, bad data)
/// is recorded under `skipped` and the batch continues; a non-finite
/// percentile difference drops the row, matching the reference screen.
/// The token is checked between tickers, so cancellation yields a
/// partial report with `cancelled = true`.
///
/// # Errors
///
/// Returns [`RondaError::InvalidConfig`] for an invalid configuration
/// and [`RondaError::Cancelled`] when the token is already cancelled on
/// entry. Per-ticker failures never surface as errors.
pub fn scan(
    store: &dyn PriceStore,
    tickers: &[Symbol],
    config: &ScanConfig,
    token: &CancellationToken,
) -> Result<ScanReport> {
    config.validate()?;
    if token.is_cancelled() {
        return Err(RondaError::Cancelled);
    }

    info!(tickers = tickers.len(), "starting market scan");

    let outcomes: Vec<TickerOutcome> = tickers
        .par_iter()
        .map(|ticker| {
            if token.is_cancelled() {
                return TickerOutcome::Cancelled;
            }
            match scan_ticker(store, ticker, config) {
                Ok(Some(row)) => TickerOutcome::Row(row),
                Ok(None) => {
                    debug!(ticker = %ticker, "non-finite percentile difference");
                    TickerOutcome::Skipped(SkippedTicker {
                        ticker: ticker.clone(),
                        reason: "non-finite percentile difference".to_string(),
                    })
                }
                Err(err) => {
                    warn!(ticker = %ticker, error = %err, "skipping ticker");
                    TickerOutcome::Skipped(SkippedTicker {
                        ticker: ticker.clone(),
                        reason: err.to_string(),
                    })
                }
            }
        })
        .collect();

    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            TickerOutcome::Row(row) => rows.push(row),
            TickerOutcome::Skipped(skip) => skipped.push(skip),
            TickerOutcome::Cancelled => {}
        }
    }

    rows.sort_by(|a, b| {
        a.pct_diff
            .partial_cmp(&b.pct_diff)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.ticker.cmp(&b.ticker))
    });
    skipped.sort_by(|a, b| a.ticker.cmp(&b.ticker));

    let cancelled = token.is_cancelled();
    info!(
        rows = rows.len(),
        skipped = skipped.len(),
        cancelled,
        "market scan finished"
    );

    Ok(ScanReport {
        rows,
        skipped,
        cancelled,
    })
}

fn scan_ticker(store: &dyn PriceStore, ticker: &str, config: &ScanConfig) -> Result<Option<ScanRow>> {
    let prices = store.load_prices(ticker)?;
    let current_price = prices
        .last_close()
        .ok_or_else(|| RondaError::InsufficientData("empty price history".to_string()))?;

    let mut rng = rng_for_ticker(config.seed, ticker);
    let paths = simulate_history(&prices, &config.simulation, &mut rng)?;
    let summary = summarize(
        &paths,
        current_price,
        config.confidence_level,
        &[config.reference_rank],
    )?;

    let Some(reference_price) = summary.percentile(config.reference_rank) else {
        return Ok(None);
    };
    let pct_diff = (reference_price - current_price) / current_price * 100.0;
    if !pct_diff.is_finite() {
        return Ok(None);
    }

    Ok(Some(ScanRow {
        ticker: ticker.to_string(),
        current_price,
        reference_price,
        pct_diff,
        mean_terminal_price: summary.mean,
        value_at_risk: summary.value_at_risk,
        value_at_risk_pct: summary.value_at_risk_pct,
    }))
}

/// Derive a per-ticker rng so batch results do not depend on thread
/// interleaving.
fn rng_for_ticker(seed: Option<u64>, ticker: &str) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, |base| {
        let mut hasher = DefaultHasher::new();
        ticker.hash(&mut hasher);
        StdRng::seed_from_u64(base ^ hasher.finish())
    })
}
