//! Health monitoring response types.

use schemars::JsonSchema;
use serde::Serialize;

/// Liveness response.
#[must_use]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Health {
    /// Always "ok" while the process is serving requests.
    pub status: &'static str,
    /// Server version.
    pub version: &'static str,
}

impl Health {
    /// Returns the current liveness response.
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
