//! Storage error to HTTP error conversion.

use murmur_opendal::StorageError;

use crate::handler::{Error, ErrorKind};

/// Tracing target for storage error conversion.
const TRACING_TARGET: &str = "murmur_server::storage_errors";

impl From<StorageError> for Error<'static> {
    fn from(error: StorageError) -> Self {
        if error.is_not_found() {
            return ErrorKind::NotFound.with_resource("file");
        }

        tracing::error!(
            target: TRACING_TARGET,
            error = %error,
            "storage error"
        );

        ErrorKind::InternalServerError.into_error()
    }
}
