//! Local price-store backends for the Ronda toolkit.
//!
//! Implementations of the [`PriceStore`](ronda_traits::PriceStore)
//! boundary trait from `ronda-traits`:
//!
//! - [`CsvPriceStore`]: a directory of per-ticker CSV price files, the
//!   on-disk layout used by the CLI.
//! - [`MemoryPriceStore`]: a `HashMap`-backed store for tests and
//!   embedding.
//!
//! The [`universe`] module loads a brokerage-availability CSV and
//! filters the scan ticker list down to tradeable instruments.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod csv;
pub mod memory;
pub mod universe;

pub use self::csv::CsvPriceStore;
pub use memory::MemoryPriceStore;
pub use universe::{filter_tickers, load_universe};
