//! Enhanced request extractors with improved error handling.
//!
//! Drop-in replacements for the standard axum extractors that reject with
//! the handler [`Error`](crate::handler::Error) type, so every failure
//! serializes as the same [`ErrorResponse`](crate::handler::response::ErrorResponse)
//! shape.

mod enhanced_json;
mod enhanced_query;
mod validated_json;

pub use enhanced_json::Json;
pub use enhanced_query::Query;
pub use validated_json::ValidateJson;
