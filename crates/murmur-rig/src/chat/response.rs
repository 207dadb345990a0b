//! Complete chat response assembled after the stream ends.

use serde::{Deserialize, Serialize};

/// The finalized assistant output of one chat request.
///
/// `turns` holds one entry per agent step that produced text; each entry
/// becomes its own persisted assistant message. `content` is the joined
/// text for consumers that only need the whole reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Wire name of the model variant that produced the response.
    pub model: String,
    /// Full response text.
    pub content: String,
    /// One entry per agent step that produced text, in order.
    pub turns: Vec<String>,
}

impl ChatResponse {
    /// Creates a response from the per-step texts.
    pub fn new(model: impl Into<String>, turns: Vec<String>) -> Self {
        Self {
            model: model.into(),
            content: turns.join("\n\n"),
            turns,
        }
    }

    /// Returns whether the model produced no text at all.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_turns_into_content() {
        let response = ChatResponse::new(
            "chat-model-small",
            vec!["First.".to_string(), "Second.".to_string()],
        );

        assert_eq!(response.content, "First.\n\nSecond.");
        assert_eq!(response.turns.len(), 2);
        assert!(!response.is_empty());
    }

    #[test]
    fn empty_response() {
        let response = ChatResponse::new("chat-model-small", Vec::new());
        assert!(response.is_empty());
        assert_eq!(response.content, "");
    }
}
