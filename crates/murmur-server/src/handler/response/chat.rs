//! Chat streaming response types.

use murmur_rig::ChatEvent;
use serde::{Deserialize, Serialize};

/// SSE event wrapper for chat streaming.
///
/// Wraps [`ChatEvent`] and provides the SSE event-type name used on the
/// wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatStreamEvent {
    /// The underlying chat event.
    #[serde(flatten)]
    pub event: ChatEvent,
}

impl ChatStreamEvent {
    /// Creates a new stream event from a chat event.
    pub fn new(event: ChatEvent) -> Self {
        Self { event }
    }

    /// Returns the SSE event type name.
    pub fn event_type(&self) -> &'static str {
        match &self.event {
            ChatEvent::Reasoning { .. } => "reasoning",
            ChatEvent::TextDelta { .. } => "text_delta",
            ChatEvent::ToolCall { .. } => "tool_call",
            ChatEvent::ToolResult { .. } => "tool_result",
            ChatEvent::Done { .. } => "done",
            ChatEvent::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_mapping_is_stable() {
        let event = ChatStreamEvent::new(ChatEvent::TextDelta {
            delta: "hi".into(),
        });
        assert_eq!(event.event_type(), "text_delta");

        let event = ChatStreamEvent::new(ChatEvent::Error {
            message: "oops".into(),
        });
        assert_eq!(event.event_type(), "error");
    }
}
