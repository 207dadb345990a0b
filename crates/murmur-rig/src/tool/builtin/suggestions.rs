//! Suggestion-request tool.

use std::sync::Arc;

use murmur_postgres::PgClient;
use murmur_postgres::model::NewSuggestion;
use murmur_postgres::query::{DocumentRepository, SuggestionRepository};
use serde::Deserialize;
use uuid::Uuid;

use super::strip_code_fence;
use crate::provider::CompletionProvider;
use crate::tool::{ToolDefinition, ToolHandler, ToolOutput};
use crate::Error;

/// System prompt for generating writing suggestions.
const SUGGESTIONS_PROMPT: &str = "You are a writing assistant. Given a document, \
suggest up to five improvements to individual sentences. Respond with a JSON array \
of objects with the fields \"original_text\", \"suggested_text\" and \
\"description\", and nothing else.";

#[derive(Debug, Deserialize)]
struct SuggestionsArgs {
    #[serde(rename = "documentId")]
    document_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct GeneratedSuggestion {
    original_text: String,
    suggested_text: String,
    #[serde(default)]
    description: Option<String>,
}

/// Returns the `request_suggestions` tool definition.
pub(super) fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "request_suggestions",
        "Request writing suggestions for a document",
        serde_json::json!({
            "type": "object",
            "properties": {
                "documentId": {
                    "type": "string",
                    "description": "Id of the document to request edits for"
                }
            },
            "required": ["documentId"]
        }),
    )
}

/// Returns the `request_suggestions` handler.
pub(super) fn handler(pg_client: PgClient, provider: CompletionProvider) -> ToolHandler {
    Arc::new(move |input| {
        let pg_client = pg_client.clone();
        let provider = provider.clone();
        Box::pin(async move {
            let args: SuggestionsArgs = input
                .parse()
                .map_err(|e| Error::tool("request_suggestions", e.to_string()))?;

            let mut conn = pg_client.get_connection().await.map_err(Error::from)?;
            let document = conn
                .find_document_by_id(args.document_id)
                .await
                .map_err(Error::from)?
                .ok_or_else(|| Error::tool("request_suggestions", "document not found"))?;

            if !document.is_owned_by(input.account_id) {
                return Err(Error::tool("request_suggestions", "document not found"));
            }

            let content = document.content.as_deref().unwrap_or_default();
            let raw = provider.complete(Some(SUGGESTIONS_PROMPT), content, Vec::new()).await?;

            let generated: Vec<GeneratedSuggestion> =
                serde_json::from_str(strip_code_fence(&raw)).map_err(|e| {
                    Error::tool("request_suggestions", format!("unparsable model output: {e}"))
                })?;

            let rows = generated
                .into_iter()
                .map(|s| NewSuggestion {
                    document_id: document.id,
                    account_id: input.account_id,
                    original_text: s.original_text,
                    suggested_text: s.suggested_text,
                    description: s.description,
                })
                .collect();

            let stored = conn.create_suggestions(rows).await.map_err(Error::from)?;

            Ok(ToolOutput::json(serde_json::json!({
                "id": document.id,
                "title": document.title,
                "kind": document.document_kind,
                "suggestionCount": stored.len(),
                "message": "Suggestions have been added to the document",
            })))
        })
    })
}
