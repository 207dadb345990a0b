//! Document creation and update tools.

use std::sync::Arc;

use murmur_postgres::PgClient;
use murmur_postgres::model::{NewDocument, UpdateDocument};
use murmur_postgres::query::DocumentRepository;
use serde::Deserialize;
use uuid::Uuid;

use crate::provider::CompletionProvider;
use crate::tool::{ToolDefinition, ToolHandler, ToolOutput};
use crate::Error;

/// System prompt for generating initial document content.
const CREATE_PROMPT: &str = "You are a writing assistant. Write a helpful document \
about the given topic. Use Markdown where appropriate. Respond with the document \
content only, without any preface.";

/// System prompt for rewriting an existing document.
const UPDATE_PROMPT: &str = "You are a writing assistant. Rewrite the given document \
according to the requested change. Respond with the full updated document content \
only, without any preface.";

#[derive(Debug, Deserialize)]
struct CreateArgs {
    title: String,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateArgs {
    id: Uuid,
    description: String,
}

/// Returns the `create_document` tool definition.
pub(super) fn create_definition() -> ToolDefinition {
    ToolDefinition::new(
        "create_document",
        "Create a document for a writing activity; the content is generated from the title",
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Title of the document to create"
                },
                "kind": {
                    "type": "string",
                    "enum": ["text", "code"],
                    "description": "Kind of document"
                }
            },
            "required": ["title"]
        }),
    )
}

/// Returns the `create_document` handler.
pub(super) fn create_handler(pg_client: PgClient, provider: CompletionProvider) -> ToolHandler {
    Arc::new(move |input| {
        let pg_client = pg_client.clone();
        let provider = provider.clone();
        Box::pin(async move {
            let args: CreateArgs = input
                .parse()
                .map_err(|e| Error::tool("create_document", e.to_string()))?;

            let content = provider.complete(Some(CREATE_PROMPT), &args.title, Vec::new()).await?;

            let mut conn = pg_client.get_connection().await.map_err(Error::from)?;
            let document = conn
                .create_document(NewDocument {
                    id: None,
                    account_id: input.account_id,
                    title: args.title,
                    content: Some(content),
                    document_kind: args.kind,
                })
                .await
                .map_err(Error::from)?;

            Ok(ToolOutput::json(serde_json::json!({
                "id": document.id,
                "title": document.title,
                "kind": document.document_kind,
                "content": "A document was created and is now visible to the user.",
            })))
        })
    })
}

/// Returns the `update_document` tool definition.
pub(super) fn update_definition() -> ToolDefinition {
    ToolDefinition::new(
        "update_document",
        "Update a document with the given description of changes",
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "Id of the document to update"
                },
                "description": {
                    "type": "string",
                    "description": "Description of the changes to apply"
                }
            },
            "required": ["id", "description"]
        }),
    )
}

/// Returns the `update_document` handler.
pub(super) fn update_handler(pg_client: PgClient, provider: CompletionProvider) -> ToolHandler {
    Arc::new(move |input| {
        let pg_client = pg_client.clone();
        let provider = provider.clone();
        Box::pin(async move {
            let args: UpdateArgs = input
                .parse()
                .map_err(|e| Error::tool("update_document", e.to_string()))?;

            let mut conn = pg_client.get_connection().await.map_err(Error::from)?;
            let document = conn
                .find_document_by_id(args.id)
                .await
                .map_err(Error::from)?
                .ok_or_else(|| Error::tool("update_document", "document not found"))?;

            if !document.is_owned_by(input.account_id) {
                return Err(Error::tool("update_document", "document not found"));
            }

            let prompt = format!(
                "Current content:\n{}\n\nRequested change: {}",
                document.content.as_deref().unwrap_or_default(),
                args.description,
            );
            let content = provider.complete(Some(UPDATE_PROMPT), &prompt, Vec::new()).await?;

            let document = conn
                .update_document(
                    args.id,
                    UpdateDocument {
                        title: None,
                        content: Some(content),
                    },
                )
                .await
                .map_err(Error::from)?;

            Ok(ToolOutput::json(serde_json::json!({
                "id": document.id,
                "title": document.title,
                "kind": document.document_kind,
                "content": "The document has been updated successfully.",
            })))
        })
    })
}
