//! Tool definitions and schemas.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definition of a tool available to the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool.
    name: String,

    /// Human-readable description.
    description: String,

    /// JSON Schema for the tool's parameters.
    parameters: Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tool description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameter schema.
    pub fn parameters(&self) -> &Value {
        &self.parameters
    }

    /// Converts to the rig completion-request representation.
    pub fn to_rig_tool(&self) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_rig_tool() {
        let definition = ToolDefinition::new(
            "get_weather",
            "Get the current weather at a location",
            serde_json::json!({"type": "object"}),
        );

        let rig_tool = definition.to_rig_tool();
        assert_eq!(rig_tool.name, "get_weather");
        assert_eq!(rig_tool.parameters, serde_json::json!({"type": "object"}));
    }
}
