//! Built-in tools available to the assistant.
//!
//! - `get_weather` - current conditions from the Open-Meteo API
//! - `create_document` - generates a document and persists it
//! - `update_document` - rewrites a document per a change description
//! - `request_suggestions` - generates improvement suggestions for a document

mod documents;
mod suggestions;
mod weather;

use murmur_postgres::PgClient;

use super::ToolRegistry;
use crate::provider::CompletionProvider;

/// Builds the default tool registry.
///
/// `provider` is the completion model used for in-tool generations
/// (document content, suggestions); tool generations are one-shot, not
/// streamed.
pub fn defaults(
    pg_client: PgClient,
    provider: CompletionProvider,
    http_client: reqwest::Client,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(weather::definition(), weather::handler(http_client));
    registry.register(
        documents::create_definition(),
        documents::create_handler(pg_client.clone(), provider.clone()),
    );
    registry.register(
        documents::update_definition(),
        documents::update_handler(pg_client.clone(), provider.clone()),
    );
    registry.register(
        suggestions::definition(),
        suggestions::handler(pg_client, provider),
    );

    registry
}

/// Strips a Markdown code fence from one-shot model output, if present.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::strip_code_fence;

    #[test]
    fn strips_json_fence() {
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("[1]"), "[1]");
    }
}
