//! Structured logging bootstrap.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

/// Raised when a global tracing subscriber cannot be installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tracing init failed: {message}")]
pub struct TelemetryError {
    /// Subscriber failure description.
    pub message: String,
}

/// Install a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// Fails, rather than panicking, when a global subscriber is already set.
pub fn init_tracing() -> Result<(), TelemetryError> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
        .map_err(|err| TelemetryError {
            message: err.to_string(),
        })
}
