//! System prompts per model variant.

use crate::provider::ChatModel;

/// Base conversational prompt shared by every variant.
const REGULAR_PROMPT: &str = "You are a friendly assistant! Keep your responses concise and helpful.";

/// Guidance for the document/suggestion tools, appended for tool-capable
/// variants.
const ARTIFACTS_PROMPT: &str = "\
When the user asks you to write or edit a document, use the document tools: \
`create_document` to create a new document, `update_document` to apply a change \
to an existing one, and `request_suggestions` to gather improvement suggestions. \
Do not repeat the full document content in the conversation after a tool call; \
the user already sees the document. Use `get_weather` for weather questions.";

/// System prompt for one-shot chat title generation.
pub(crate) const TITLE_PROMPT: &str = "\
You will generate a short title based on the first message a user begins a \
conversation with. Ensure it is not more than 80 characters long. The title \
should be a summary of the user's message. Do not use quotes or colons.";

/// Longest title stored for a chat.
const MAX_TITLE_LENGTH: usize = 80;

/// Returns the system prompt for a model variant.
///
/// The reasoning variant runs without tools, so it only receives the base
/// prompt.
pub(crate) fn system_prompt(model: ChatModel) -> String {
    if model.is_reasoning() {
        REGULAR_PROMPT.to_string()
    } else {
        format!("{REGULAR_PROMPT}\n\n{ARTIFACTS_PROMPT}")
    }
}

/// Derives a title from the message text directly.
///
/// Used when title generation fails so that chat creation never fails on
/// the title path.
pub(crate) fn title_fallback(message: &str) -> String {
    let trimmed = message.trim();
    if trimmed.chars().count() <= MAX_TITLE_LENGTH {
        return trimmed.to_string();
    }

    let mut title: String = trimmed.chars().take(MAX_TITLE_LENGTH - 1).collect();
    title.push('…');
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasoning_prompt_omits_tool_guidance() {
        let prompt = system_prompt(ChatModel::Reasoning);
        assert!(!prompt.contains("create_document"));

        let prompt = system_prompt(ChatModel::Small);
        assert!(prompt.contains("create_document"));
    }

    #[test]
    fn fallback_title_respects_length_limit() {
        let short = title_fallback("Hello");
        assert_eq!(short, "Hello");

        let long_message = "x".repeat(200);
        let title = title_fallback(&long_message);
        assert!(title.chars().count() <= 80);
        assert!(title.ends_with('…'));
    }
}
