//! Language-model error to HTTP error conversion.

use crate::handler::{Error, ErrorKind};

/// Tracing target for model error conversion.
const TRACING_TARGET: &str = "murmur_server::rig_errors";

impl From<murmur_rig::Error> for Error<'static> {
    fn from(error: murmur_rig::Error) -> Self {
        tracing::error!(
            target: TRACING_TARGET,
            error = %error,
            "language model error"
        );

        // Provider detail never reaches the client.
        ErrorKind::InternalServerError.with_message("The assistant is currently unavailable")
    }
}
