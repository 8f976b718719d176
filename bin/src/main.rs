//! Ronda CLI binary.
//!
//! Provides a command-line interface for the Ronda simulation toolkit.

mod cmd;
mod data;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Monte Carlo price simulation and risk estimation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tickers available in the price store
    Tickers {
        /// Directory of per-ticker CSV price files
        #[arg(short, long, default_value = "data/prices")]
        data: PathBuf,

        /// Brokerage universe CSV (act_symbol column) to filter by
        #[arg(short, long)]
        universe: Option<PathBuf>,
    },

    /// Simulate one ticker and print its risk summary
    Simulate {
        /// Ticker symbol
        ticker: String,

        /// Directory of per-ticker CSV price files
        #[arg(short, long, default_value = "data/prices")]
        data: PathBuf,

        /// Rolling window (observations) for return estimation
        #[arg(short, long, default_value_t = 30)]
        window: usize,

        /// Number of simulated paths
        #[arg(short, long, default_value_t = 2000)]
        paths: usize,

        /// Prediction horizon in trading days
        #[arg(short = 'H', long, default_value_t = 30)]
        horizon: usize,

        /// Confidence level for Value-at-Risk
        #[arg(long, default_value_t = 0.95)]
        confidence: f64,

        /// Seed for reproducible draws (entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Scan every ticker and rank by percentile difference
    Scan {
        /// Directory of per-ticker CSV price files
        #[arg(short, long, default_value = "data/prices")]
        data: PathBuf,

        /// Brokerage universe CSV (act_symbol column) to filter by
        #[arg(short, long)]
        universe: Option<PathBuf>,

        /// Rolling window (observations) for return estimation
        #[arg(short, long, default_value_t = 180)]
        window: usize,

        /// Number of simulated paths per ticker
        #[arg(short, long, default_value_t = 2000)]
        paths: usize,

        /// Prediction horizon in trading days
        #[arg(short = 'H', long, default_value_t = 30)]
        horizon: usize,

        /// Confidence level for Value-at-Risk
        #[arg(long, default_value_t = 0.95)]
        confidence: f64,

        /// Percentile rank compared against the current close
        #[arg(short, long, default_value_t = 20.0)]
        rank: f64,

        /// Base seed for reproducible scans (entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Show at most this many rows
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tickers { data, universe } => cmd::tickers::run_tickers(&data, universe.as_deref()),
        Commands::Simulate {
            ticker,
            data,
            window,
            paths,
            horizon,
            confidence,
            seed,
            format,
        } => cmd::simulate::run_simulate(
            &ticker,
            &data,
            window,
            paths,
            horizon,
            confidence,
            seed,
            &format,
        ),
        Commands::Scan {
            data,
            universe,
            window,
            paths,
            horizon,
            confidence,
            rank,
            seed,
            limit,
            format,
        } => cmd::scan::run_scan(
            &data,
            universe.as_deref(),
            window,
            paths,
            horizon,
            confidence,
            rank,
            seed,
            limit,
            &format,
        ),
    }
}
