//! Suggestion request types.

use schemars::JsonSchema;
use serde::Deserialize;
use uuid::Uuid;

/// Query parameters of the suggestions endpoint.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SuggestionsParams {
    /// Document to fetch suggestions for; a missing id yields 404.
    #[serde(rename = "documentId")]
    pub document_id: Option<Uuid>,
}
