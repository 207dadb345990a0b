//! Document model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::documents;

/// Document model representing an artifact the assistant created or edits.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// Account that owns this document.
    pub account_id: Uuid,
    /// Document title.
    pub title: String,
    /// Document body; absent until content is first written.
    pub content: Option<String>,
    /// Document kind (text, code, ...).
    pub document_kind: String,
    /// Timestamp when the document was created.
    pub created_at: Timestamp,
}

impl Document {
    /// Returns whether the given account owns this document.
    #[inline]
    pub fn is_owned_by(&self, account_id: Uuid) -> bool {
        self.account_id == account_id
    }
}

/// Data structure for creating a new document.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewDocument {
    /// Optional explicit identifier; generated by the database otherwise.
    pub id: Option<Uuid>,
    /// Owning account.
    pub account_id: Uuid,
    /// Document title.
    pub title: String,
    /// Initial content, if any.
    pub content: Option<String>,
    /// Document kind (text, code, ...).
    pub document_kind: Option<String>,
}

/// Data structure for updating an existing document.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateDocument {
    /// Updated title.
    pub title: Option<String>,
    /// Updated content.
    pub content: Option<String>,
}
