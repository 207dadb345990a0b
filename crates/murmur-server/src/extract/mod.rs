//! HTTP request extractors with improved error handling and validation.
//!
//! # Extractor Categories
//!
//! ## Authentication
//!
//! - [`AuthSession`] - Resolved session via the injectable session provider
//!
//! ## Request Data Extraction
//!
//! - [`Json`] - Enhanced JSON deserialization with better error messages
//! - [`ValidateJson`] - JSON extraction with automatic validation
//! - [`Query`] - Query parameter extraction with enhanced error messages

mod reject;
mod session;

pub use crate::extract::reject::{Json, Query, ValidateJson};
pub use crate::extract::session::AuthSession;
