//! Suggestion response types.

use jiff::Timestamp;
use murmur_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A document suggestion as returned to the client.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Unique suggestion identifier.
    pub id: Uuid,
    /// Document the suggestion applies to.
    pub document_id: Uuid,
    /// Text the suggestion would replace.
    pub original_text: String,
    /// Proposed replacement text.
    pub suggested_text: String,
    /// Optional rationale shown alongside the suggestion.
    pub description: Option<String>,
    /// Whether the suggestion has been accepted or dismissed.
    pub is_resolved: bool,
    /// Timestamp when the suggestion was created.
    pub created_at: Timestamp,
}

impl Suggestion {
    /// Creates a response from a database model.
    pub fn from_model(suggestion: model::Suggestion) -> Self {
        Self {
            id: suggestion.id,
            document_id: suggestion.document_id,
            original_text: suggestion.original_text,
            suggested_text: suggestion.suggested_text,
            description: suggestion.description,
            is_resolved: suggestion.is_resolved,
            created_at: suggestion.created_at.into(),
        }
    }
}
