//! Account model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::accounts;

/// Account model representing a registered user of the assistant.
///
/// Identity resolution happens in the session provider; the account row is
/// the persistence-side anchor that chats, documents and suggestions hang
/// off.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Human-readable display name.
    pub display_name: String,
    /// Unique email address.
    pub email_address: String,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
}

/// Data structure for creating a new account.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAccount {
    /// Optional explicit identifier; generated by the database otherwise.
    pub id: Option<Uuid>,
    /// Human-readable display name.
    pub display_name: String,
    /// Unique email address.
    pub email_address: String,
}
