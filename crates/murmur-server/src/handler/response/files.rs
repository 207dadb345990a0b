//! File upload response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stored attachment reference returned by the upload endpoint.
///
/// The `url` is what clients later embed in a message as an attachment
/// marker.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Public path of the stored file, relative to the public root.
    pub url: String,
    /// Stored filename.
    pub pathname: String,
    /// Declared content type.
    pub content_type: String,
}
