//! Document repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{Document, NewDocument, UpdateDocument};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for document database operations.
pub trait DocumentRepository {
    /// Creates a new document.
    fn create_document(
        &mut self,
        document: NewDocument,
    ) -> impl Future<Output = PgResult<Document>> + Send;

    /// Finds a document by its unique identifier.
    fn find_document_by_id(
        &mut self,
        document_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Document>>> + Send;

    /// Updates an existing document.
    fn update_document(
        &mut self,
        document_id: Uuid,
        changes: UpdateDocument,
    ) -> impl Future<Output = PgResult<Document>> + Send;
}

impl DocumentRepository for PgConnection {
    async fn create_document(&mut self, document: NewDocument) -> PgResult<Document> {
        use schema::documents;

        let document = diesel::insert_into(documents::table)
            .values(&document)
            .returning(Document::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(document)
    }

    async fn find_document_by_id(&mut self, document_id: Uuid) -> PgResult<Option<Document>> {
        use schema::documents::dsl::*;

        let document = documents
            .filter(id.eq(document_id))
            .select(Document::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(document)
    }

    async fn update_document(
        &mut self,
        document_id: Uuid,
        changes: UpdateDocument,
    ) -> PgResult<Document> {
        use schema::documents::dsl::*;

        let document = diesel::update(documents)
            .filter(id.eq(document_id))
            .set(&changes)
            .returning(Document::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(document)
    }
}
