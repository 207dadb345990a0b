//! Chat model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::chats;

/// Chat model representing a conversation thread owned by one account.
///
/// A chat is created on the first message of a conversation with a title
/// derived from that message; the row is never updated afterwards.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = chats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Chat {
    /// Unique chat identifier (client-assigned on first message).
    pub id: Uuid,
    /// Account that owns this conversation.
    pub account_id: Uuid,
    /// Title derived from the first user message.
    pub title: String,
    /// Timestamp when the chat was created.
    pub created_at: Timestamp,
}

impl Chat {
    /// Returns whether the given account owns this chat.
    #[inline]
    pub fn is_owned_by(&self, account_id: Uuid) -> bool {
        self.account_id == account_id
    }
}

/// Data structure for creating a new chat.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewChat {
    /// Chat identifier, supplied by the client with the first message.
    pub id: Uuid,
    /// Owning account.
    pub account_id: Uuid,
    /// Title derived from the first user message.
    pub title: String,
}
