//! Geometric Brownian Motion simulation and risk estimation.
//!
//! This crate is the core of the Ronda toolkit. It is organized as three
//! pure, synchronous stages, each safe to invoke concurrently over
//! independently-owned inputs:
//!
//! 1. [`estimate()`]: annualized drift and volatility from the trailing
//!    window of a historical price series.
//! 2. [`simulate()`]: Monte Carlo price paths under GBM, anchored at the
//!    last known price, with an injected random source.
//! 3. [`summarize()`]: percentiles, mean and Value-at-Risk over the
//!    terminal prices of one simulation run.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use ronda_gbm::{SimulationConfig, simulate_history, summarize};
//! use ronda_traits::{Date, PriceSeries};
//!
//! let dates: Vec<Date> = (1..=6)
//!     .map(|d| Date::from_ymd_opt(2024, 2, d).unwrap())
//!     .collect();
//! let prices =
//!     PriceSeries::new(dates, vec![100.0, 101.0, 99.0, 102.0, 98.0, 103.0]).unwrap();
//!
//! let config = SimulationConfig {
//!     simulation_paths: 2000,
//!     horizon_days: 30,
//!     window_size: 5,
//!     ..Default::default()
//! };
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let paths = simulate_history(&prices, &config, &mut rng).unwrap();
//! let summary = summarize(&paths, 103.0, 0.95, &[20.0, 80.0]).unwrap();
//!
//! assert_eq!(summary.terminal_prices.len(), 2000);
//! assert!(summary.value_at_risk_pct.is_finite());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod estimate;
pub mod risk;
pub mod simulate;

pub use estimate::{ReturnStatistics, estimate};
pub use risk::{RiskSummary, summarize};
pub use simulate::{
    DEFAULT_TIME_STEP, SimulatedPaths, SimulationConfig, simulate, simulate_history,
    simulate_with_draws,
};
