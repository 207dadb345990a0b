//! Chat repository for managing conversation threads.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{Chat, NewChat};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for chat database operations.
///
/// A chat row is created once, on the first message of a conversation, and
/// deleted as a whole together with its messages.
pub trait ChatRepository {
    /// Creates a new chat.
    fn create_chat(&mut self, chat: NewChat) -> impl Future<Output = PgResult<Chat>> + Send;

    /// Finds a chat by its unique identifier.
    fn find_chat_by_id(
        &mut self,
        chat_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Chat>>> + Send;

    /// Deletes a chat row.
    ///
    /// Messages are removed by the `ON DELETE CASCADE` constraint.
    fn delete_chat(&mut self, chat_id: Uuid) -> impl Future<Output = PgResult<()>> + Send;

    /// Lists chats owned by an account, newest first.
    fn list_account_chats(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<Chat>>> + Send;
}

impl ChatRepository for PgConnection {
    async fn create_chat(&mut self, chat: NewChat) -> PgResult<Chat> {
        use schema::chats;

        let chat = diesel::insert_into(chats::table)
            .values(&chat)
            .returning(Chat::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(chat)
    }

    async fn find_chat_by_id(&mut self, chat_id: Uuid) -> PgResult<Option<Chat>> {
        use schema::chats::dsl::*;

        let chat = chats
            .filter(id.eq(chat_id))
            .select(Chat::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(chat)
    }

    async fn delete_chat(&mut self, chat_id: Uuid) -> PgResult<()> {
        use schema::chats::dsl::*;

        diesel::delete(chats)
            .filter(id.eq(chat_id))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(())
    }

    async fn list_account_chats(&mut self, acc_id: Uuid) -> PgResult<Vec<Chat>> {
        use schema::chats::{self, dsl};

        let rows = chats::table
            .filter(dsl::account_id.eq(acc_id))
            .select(Chat::as_select())
            .order(dsl::created_at.desc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
