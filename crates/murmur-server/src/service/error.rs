//! Service initialization errors.

use murmur_opendal::StorageError;
use murmur_postgres::PgError;

/// A specialized [`Result`] type for service construction.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

/// Errors raised while wiring the service state together.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Database client could not be created.
    #[error("database error: {0}")]
    Postgres(#[from] PgError),

    /// Language-model providers could not be connected.
    #[error("language model error: {0}")]
    Model(#[from] murmur_rig::Error),

    /// Storage backend could not be initialized.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
