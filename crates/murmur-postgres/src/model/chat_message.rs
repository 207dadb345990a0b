//! Chat message model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::chat_messages;
use crate::types::ChatRole;

/// One turn within a chat, immutable once stored.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = chat_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// Chat this message belongs to.
    pub chat_id: Uuid,
    /// Which side of the conversation produced the message.
    pub message_role: ChatRole,
    /// Message text.
    pub content: String,
    /// Server-assigned creation timestamp.
    pub created_at: Timestamp,
}

impl ChatMessage {
    /// Returns whether this message came from the account holder.
    #[inline]
    pub fn is_user(&self) -> bool {
        self.message_role.is_user()
    }

    /// Returns whether this message came from the model.
    #[inline]
    pub fn is_assistant(&self) -> bool {
        self.message_role.is_assistant()
    }
}

/// Data structure for creating a new chat message.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chat_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewChatMessage {
    /// Optional explicit identifier; generated by the database otherwise.
    pub id: Option<Uuid>,
    /// Chat this message belongs to.
    pub chat_id: Uuid,
    /// Which side of the conversation produced the message.
    pub message_role: ChatRole,
    /// Message text.
    pub content: String,
}

impl NewChatMessage {
    /// Creates an inbound user message.
    pub fn user(chat_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: None,
            chat_id,
            message_role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates an outbound assistant message.
    pub fn assistant(chat_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id: None,
            chat_id,
            message_role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
