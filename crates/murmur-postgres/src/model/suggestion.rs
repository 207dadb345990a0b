//! Suggestion model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::suggestions;

/// A proposed edit to a document, produced by the suggestion tool.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = suggestions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Suggestion {
    /// Unique suggestion identifier.
    pub id: Uuid,
    /// Document the suggestion applies to.
    pub document_id: Uuid,
    /// Account that owns the document.
    pub account_id: Uuid,
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

/// Data structure for creating a new suggestion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = suggestions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewSuggestion {
    /// Document the suggestion applies to.
    pub document_id: Uuid,
    /// Account that owns the document.
    pub account_id: Uuid,
    /// Text the suggestion would replace.
    pub original_text: String,
    /// Proposed replacement text.
    pub suggested_text: String,
    /// Optional rationale shown alongside the suggestion.
    pub description: Option<String>,
}
