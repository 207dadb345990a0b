//! Provider-agnostic streaming fragments.

use rig::streaming::StreamedAssistantContent;

/// One incremental piece of a streamed completion, with the
/// provider-specific response type erased.
#[derive(Debug, Clone)]
pub enum StreamFragment {
    /// Incremental response text.
    TextDelta(String),
    /// Incremental reasoning text (reasoning models only).
    ReasoningDelta(String),
    /// The model requested a tool invocation.
    ToolCall(rig::message::ToolCall),
    /// End-of-stream marker carrying no further content.
    Finished,
}

impl StreamFragment {
    /// Converts a rig streamed content chunk into a fragment.
    pub(crate) fn from_content<R>(content: StreamedAssistantContent<R>) -> Self {
        match content {
            StreamedAssistantContent::Text(text) => Self::TextDelta(text.text().into()),
            StreamedAssistantContent::Reasoning(reasoning) => {
                Self::ReasoningDelta(reasoning.reasoning.join(""))
            }
            StreamedAssistantContent::ToolCall(call) => Self::ToolCall(call),
            _ => Self::Finished,
        }
    }
}
