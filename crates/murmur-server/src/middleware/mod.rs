//! Middleware for `axum::Router` and HTTP request processing.
//!
//! Three extension traits cover the ambient concerns of the router:
//!
//! - [`RouterObservabilityExt`] - request IDs, tracing spans, header
//!   redaction
//! - [`RouterRecoveryExt`] - panic capture and request timeouts
//! - [`RouterSecurityExt`] - CORS, security headers, compression, body
//!   limits
//!
//! Layers are applied in reverse order (last added = outermost), so the
//! usual stack is security, then observability, then recovery on the
//! outside.

mod observability;
mod recovery;
mod security;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{CorsConfig, RouterSecurityExt};
