//! Suggestion repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewSuggestion, Suggestion};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for suggestion database operations.
pub trait SuggestionRepository {
    /// Persists a batch of suggestions for a document.
    fn create_suggestions(
        &mut self,
        suggestions: Vec<NewSuggestion>,
    ) -> impl Future<Output = PgResult<Vec<Suggestion>>> + Send;

    /// Lists the suggestions attached to a document, oldest first.
    fn list_document_suggestions(
        &mut self,
        document_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<Suggestion>>> + Send;
}

impl SuggestionRepository for PgConnection {
    async fn create_suggestions(
        &mut self,
        suggestions: Vec<NewSuggestion>,
    ) -> PgResult<Vec<Suggestion>> {
        use schema::suggestions;

        if suggestions.is_empty() {
            return Ok(Vec::new());
        }

        let suggestions = diesel::insert_into(suggestions::table)
            .values(&suggestions)
            .returning(Suggestion::as_returning())
            .get_results(self)
            .await
            .map_err(PgError::from)?;

        Ok(suggestions)
    }

    async fn list_document_suggestions(&mut self, doc_id: Uuid) -> PgResult<Vec<Suggestion>> {
        use schema::suggestions::{self, dsl};

        let rows = suggestions::table
            .filter(dsl::document_id.eq(doc_id))
            .select(Suggestion::as_select())
            .order(dsl::created_at.asc())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
