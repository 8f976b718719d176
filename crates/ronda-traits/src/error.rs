//! Error types for the Ronda toolkit.
//!
//! This module defines the error taxonomy shared by the estimation,
//! simulation and scan crates. Errors are never swallowed by the core:
//! every failure surfaces to the immediate caller, and batch consumers
//! decide whether to skip or abort.

use thiserror::Error;

/// The main error type for Ronda operations.
#[derive(Debug, Error)]
pub enum RondaError {
    /// Not enough historical observations to satisfy the requested window.
    ///
    /// Recoverable by the caller: skip the ticker, shrink the window, or
    /// surface the problem to the user.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Malformed simulation or risk parameters.
    ///
    /// Always a programming or configuration error, never retried.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error due to invalid or malformed input data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A ticker was not found in the price store.
    #[error("Ticker not found: {0}")]
    TickerNotFound(String),

    /// A batch operation was cancelled before it completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// I/O error from a store backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for RondaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for RondaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Ronda operations.
///
/// This is a convenience type that uses [`RondaError`] as the error type.
pub type Result<T> = std::result::Result<T, RondaError>;
