//! Tool input/output types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A tool invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call identifier, echoed back in the result.
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// Arguments as produced by the model.
    pub arguments: Value,
}

impl ToolCall {
    /// Converts a rig tool call into the registry representation.
    pub fn from_rig(call: &rig::message::ToolCall) -> Self {
        Self {
            id: call.id.clone(),
            name: call.function.name.clone(),
            arguments: call.function.arguments.clone(),
        }
    }
}

/// Input to a tool execution.
#[derive(Debug, Clone)]
pub struct ToolInput {
    /// The call ID.
    pub call_id: String,
    /// Account on whose behalf the tool runs; used for ownership checks.
    pub account_id: Uuid,
    /// Arguments from the tool call.
    pub arguments: Value,
}

impl ToolInput {
    /// Gets a string argument.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Gets a floating point argument.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.arguments.get(key).and_then(|v| v.as_f64())
    }

    /// Deserializes the arguments to a typed struct.
    pub fn parse<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.arguments.clone())
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolOutput {
    /// Plain text output.
    Text { content: String },

    /// JSON output.
    Json { data: Value },

    /// Empty output.
    Empty,
}

impl ToolOutput {
    /// Creates a text output.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Creates a JSON output.
    pub fn json(data: Value) -> Self {
        Self::Json { data }
    }

    /// Converts to a string representation for the LLM.
    pub fn to_llm_string(&self) -> String {
        match self {
            Self::Text { content } => content.clone(),
            Self::Json { data } => serde_json::to_string_pretty(data).unwrap_or_default(),
            Self::Empty => "[No output]".to_string(),
        }
    }
}

/// Result of executing a tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Identifier of the call this result answers.
    pub id: String,
    /// Tool output, or an error description.
    pub output: ToolOutput,
    /// Whether the execution failed.
    pub is_error: bool,
}

impl ToolResult {
    /// Creates a successful result.
    pub fn success(id: impl Into<String>, output: ToolOutput) -> Self {
        Self {
            id: id.into(),
            output,
            is_error: false,
        }
    }

    /// Creates a failed result.
    pub fn failure(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            output: ToolOutput::text(message),
            is_error: true,
        }
    }

    /// Converts the result to a string representation for the LLM.
    pub fn to_llm_string(&self) -> String {
        if self.is_error {
            format!("[Tool failed] {}", self.output.to_llm_string())
        } else {
            self.output.to_llm_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_input_accessors() {
        let input = ToolInput {
            call_id: "call_1".into(),
            account_id: Uuid::now_v7(),
            arguments: serde_json::json!({
                "latitude": 52.52,
                "title": "Notes"
            }),
        };

        assert_eq!(input.get_string("title"), Some("Notes"));
        assert_eq!(input.get_f64("latitude"), Some(52.52));
        assert_eq!(input.get_string("missing"), None);
    }

    #[test]
    fn tool_output_to_llm_string() {
        let text = ToolOutput::text("hello");
        assert_eq!(text.to_llm_string(), "hello");

        assert_eq!(ToolOutput::Empty.to_llm_string(), "[No output]");
    }

    #[test]
    fn failed_result_is_marked_for_llm() {
        let result = ToolResult::failure("call_1", "boom");
        assert!(result.is_error);
        assert!(result.to_llm_string().starts_with("[Tool failed]"));
    }
}
