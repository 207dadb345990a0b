//! Chat events emitted during streaming.

use serde::{Deserialize, Serialize};

use super::ChatResponse;
use crate::tool::{ToolCall, ToolResult};

/// Events emitted during chat processing.
///
/// Events are forwarded to the client in emission order; the `Done` event
/// is always last on a successful stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// Incremental reasoning text (reasoning models only).
    Reasoning { delta: String },

    /// Text delta from the model.
    TextDelta { delta: String },

    /// The model is calling a tool.
    ToolCall { call: ToolCall },

    /// Tool execution completed.
    ToolResult { result: ToolResult },

    /// Chat response completed.
    Done { response: ChatResponse },

    /// Error occurred during processing.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_event_serialization() {
        let event = ChatEvent::TextDelta {
            delta: "Hello".to_string(),
        };

        let json = serde_json::to_string(&event).expect("ChatEvent should serialize to JSON");
        assert!(json.contains("text_delta"));
        assert!(json.contains("Hello"));
    }

    #[test]
    fn done_event_carries_response() {
        let event = ChatEvent::Done {
            response: ChatResponse::new("chat-model-small", vec!["Hi there".to_string()]),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"done\""));
        assert!(json.contains("Hi there"));
    }
}
