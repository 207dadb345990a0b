//! HTTP server startup with lifecycle management.

mod error;
mod http_server;
mod shutdown;

use axum::Router;
pub use error::{ServerError, ServerResult};
use http_server::serve_http;
use shutdown::shutdown_signal;

use crate::config::ServerConfig;

/// Starts the HTTP server with graceful shutdown handling.
///
/// # Errors
///
/// Returns an error when the configuration is invalid, the address cannot
/// be bound, or the server hits a fatal error while running.
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    serve_http(app, config).await
}
