//! Common error type definitions.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
///
/// Commonly used as a source error in structured error types, wrapping any
/// error that implements the standard `Error` trait while maintaining Send
/// and Sync bounds for multi-threaded contexts.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of errors that can occur in murmur-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Input validation failed.
    InvalidInput,
    /// Document content could not be extracted.
    Extraction,
    /// Resource not found.
    NotFound,
    /// Internal error.
    Internal,
}

/// A structured error type for murmur-core operations.
#[derive(Debug, Error)]
#[error("{kind:?}{}", message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new invalid input error.
    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput)
    }

    /// Creates a new extraction error.
    pub fn extraction() -> Self {
        Self::new(ErrorKind::Extraction)
    }

    /// Creates a new not found error.
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Creates a new internal error.
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_with_message() {
        let error = Error::extraction().with_message("unreadable page");
        assert_eq!(error.to_string(), "Extraction: unreadable page");
    }

    #[test]
    fn error_kind_as_str() {
        assert_eq!(ErrorKind::InvalidInput.as_ref(), "invalid_input");
        assert_eq!(ErrorKind::Extraction.as_ref(), "extraction");
    }

    #[test]
    fn error_source_chain() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = Error::not_found().with_source(source);
        assert!(std::error::Error::source(&error).is_some());
    }
}
