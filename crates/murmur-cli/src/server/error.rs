//! Server error types.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for server operations.
///
/// [`Result`]: std::result::Result
pub type ServerResult<T> = std::result::Result<T, ServerError>;

/// Errors raised while binding or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Server configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to bind to the specified address.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Runtime server error.
    #[error("Runtime error: {0}")]
    Runtime(#[source] io::Error),
}
