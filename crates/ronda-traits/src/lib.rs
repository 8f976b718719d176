#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/rondalabs/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the Ronda simulation toolkit.
//!
//! This crate provides the foundational pieces shared by the estimation,
//! simulation, scan and store crates: the validated price container, the
//! error taxonomy, annualization and percentile helpers, and the
//! [`PriceStore`] boundary trait.

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod series;
pub mod stats;
pub mod store;

// Re-exports
pub use error::{Result, RondaError};
pub use series::{Date, PriceSeries, Symbol};
pub use stats::TRADING_DAYS_PER_YEAR;
pub use store::PriceStore;
