//! # Domain Errors
//!
//! Probe failures are ordinary outcomes here: they are recorded into the
//! endpoint's [`Status`] and never escape `is_online` / `get_status`.

use super::status::Status;
use thiserror::Error;

/// Why a single probe did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The connect did not finish within the configured timeout.
    #[error("connect timeout")]
    Timeout,

    /// The connect failed (refused, unreachable, resolution failure).
    #[error("{0}")]
    Connect(String),

    /// The endpoint reference could not be split into host and port.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        Self::Connect(err.to_string())
    }
}

/// Failure payload of a probe: the cause plus the Status as recorded.
#[derive(Debug, Clone, Error)]
#[error("probe of {} failed: {error}", .status.source)]
pub struct ProbeFailure {
    /// Cause of the failure.
    pub error: ProbeError,
    /// Status snapshot taken right after the failure was recorded.
    pub status: Status,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {error}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying error text.
        error: String,
    },

    /// The config document is not valid.
    #[error("failed to parse config: {0}")]
    Parse(String),
}
