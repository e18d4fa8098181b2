//! Error types for the MUNI MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the MUNI API.
///
/// Precondition errors are raised before any cache or network access.
/// Nothing here is retried by the client.
#[derive(Error, Debug)]
pub enum TransitError {
    /// Route ID argument was empty
    #[error("route ID is required")]
    RouteIdRequired,

    /// Stop ID argument was empty
    #[error("stop ID is required")]
    StopIdRequired,

    /// API returned something other than 200 OK
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// Network failure, timeout or cancellation
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Response body was not the expected JSON shape
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransitError {
    /// The HTTP status carried by an `UnexpectedStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransitError::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// True for errors detected before any I/O.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            TransitError::RouteIdRequired | TransitError::StopIdRequired
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with TransitError
pub type TransitResult<T> = Result<T, TransitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
