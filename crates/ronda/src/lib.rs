#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rondalabs/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # ronda
//!
//! Monte Carlo price simulation and risk estimation.
//!
//! ronda is an umbrella crate that re-exports all ronda sub-crates for
//! convenience. The toolkit is organized as a pipeline of pure stages:
//!
//! 1. **Estimate**: annualized drift and volatility from the trailing
//!    window of a historical price series ([`gbm::estimate()`]).
//! 2. **Simulate**: Geometric Brownian Motion price paths, anchored at
//!    the last known close, with an injected random source
//!    ([`gbm::simulate()`]).
//! 3. **Summarize**: percentiles, mean and Value-at-Risk over the
//!    terminal prices of one simulation run ([`gbm::summarize()`]).
//! 4. **Scan**: the same pipeline fanned out over every ticker in a
//!    price store, with cancellation and a deterministically ordered
//!    report ([`scan::scan()`]).

/// Version information for the ronda crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core types shared across the toolkit.
///
/// Re-exports `ronda-traits`: the validated [`PriceSeries`] container,
/// the [`RondaError`] taxonomy, annualization and percentile helpers in
/// [`types::stats`], and the [`PriceStore`] boundary trait.
pub mod types {
    pub use ronda_traits::*;
}

/// The simulation core: estimation, GBM paths, risk reduction.
pub mod gbm {
    pub use ronda_gbm::*;
}

/// Parallel full-market scan orchestration.
pub mod scan {
    pub use ronda_scan::*;
}

/// Local price-store backends (CSV directory, in-memory).
pub mod store {
    pub use ronda_store::*;
}

// Re-export common types at top level for convenience
pub use ronda_gbm::{
    ReturnStatistics, RiskSummary, SimulatedPaths, SimulationConfig, estimate, simulate,
    simulate_history, summarize,
};
pub use ronda_scan::{CancellationToken, ScanConfig, ScanReport};
pub use ronda_store::{CsvPriceStore, MemoryPriceStore};
pub use ronda_traits::{Date, PriceSeries, PriceStore, Result, RondaError, Symbol};

/// Prelude module for convenient imports.
///
/// ```
/// use ronda::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CancellationToken, CsvPriceStore, Date, MemoryPriceStore, PriceSeries, PriceStore, Result,
        ReturnStatistics, RiskSummary, RondaError, ScanConfig, ScanReport, SimulatedPaths,
        SimulationConfig, Symbol, estimate, simulate, simulate_history, summarize,
    };
    pub use ronda_scan::scan;
}
