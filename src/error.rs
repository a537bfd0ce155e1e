//! Error types for proxibench.

use thiserror::Error;

/// Errors surfaced by the query strategies and the benchmark runner.
#[derive(Debug, Error)]
pub enum ProxibenchError {
    /// The point store could not be reached or a query failed mid-flight.
    ///
    /// Never retried: the current strategy run is aborted and the failure is
    /// carried into the benchmark report alongside any trials that already
    /// completed.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Malformed query or configuration, rejected before any trial runs.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ProxibenchError>;
