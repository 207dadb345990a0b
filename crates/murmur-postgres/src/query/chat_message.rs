//! Chat message repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{ChatMessage, NewChatMessage};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for chat message database operations.
///
/// Messages are append-only: there is no update path, and deletion happens
/// only through the owning chat.
pub trait ChatMessageRepository {
    /// Persists a single message.
    fn create_chat_message(
        &mut self,
        message: NewChatMessage,
    ) -> impl Future<Output = PgResult<ChatMessage>> + Send;

    /// Persists a batch of messages in insertion order.
    fn create_chat_messages(
        &mut self,
        messages: Vec<NewChatMessage>,
    ) -> impl Future<Output = PgResult<Vec<ChatMessage>>> + Send;

    /// Lists the messages of a chat in conversational order.
    fn list_chat_messages(
        &mut self,
        chat_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<ChatMessage>>> + Send;
}

impl ChatMessageRepository for PgConnection {
    async fn create_chat_message(&mut self, message: NewChatMessage) -> PgResult<ChatMessage> {
        use schema::chat_messages;

        let message = diesel::insert_into(chat_messages::table)
            .values(&message)
            .returning(ChatMessage::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(message)
    }

    async fn create_chat_messages(
        &mut self,
        messages: Vec<NewChatMessage>,
    ) -> PgResult<Vec<ChatMessage>> {
        use schema::chat_messages;

        if messages.is_empty() {
            return Ok(Vec::new());
        }

        let messages = diesel::insert_into(chat_messages::table)
            .values(&messages)
            .returning(ChatMessage::as_returning())
            .get_results(self)
            .await
            .map_err(PgError::from)?;

        Ok(messages)
    }

    async fn list_chat_messages(&mut self, chat: Uuid) -> PgResult<Vec<ChatMessage>> {
        use schema::chat_messages::{self, dsl};

        let rows = chat_messages::table
            .filter(dsl::chat_id.eq(chat))
            .select(ChatMessage::as_select())
            .order(dsl::created_at.asc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
