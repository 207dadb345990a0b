//! Tool registry for managing available tools.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use super::{ToolCall, ToolDefinition, ToolInput, ToolOutput, ToolResult};
use crate::{Result, TRACING_TARGET_TOOL};

/// Handler function for tool execution.
pub type ToolHandler =
    Arc<dyn Fn(ToolInput) -> futures::future::BoxFuture<'static, Result<ToolOutput>> + Send + Sync>;

/// Registry of available tools.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    definitions: HashMap<String, ToolDefinition>,
    handlers: HashMap<String, ToolHandler>,
}

impl ToolRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers both definition and handler.
    pub fn register(&mut self, definition: ToolDefinition, handler: ToolHandler) {
        let name = definition.name().to_string();
        self.definitions.insert(name.clone(), definition);
        self.handlers.insert(name, handler);
    }

    /// Returns a tool definition by name.
    pub fn get_definition(&self, name: &str) -> Option<&ToolDefinition> {
        self.definitions.get(name)
    }

    /// Returns all tool definitions.
    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.definitions.values()
    }

    /// Returns all definitions in the rig completion-request representation.
    pub fn rig_definitions(&self) -> Vec<rig::completion::ToolDefinition> {
        self.definitions
            .values()
            .map(ToolDefinition::to_rig_tool)
            .collect()
    }

    /// Returns whether a tool exists.
    pub fn has_tool(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Executes a tool call on behalf of an account.
    ///
    /// A missing tool or a handler error never propagates; it becomes a
    /// failed [`ToolResult`] the model can react to.
    pub async fn execute(&self, call: &ToolCall, account_id: Uuid) -> ToolResult {
        let Some(handler) = self.handlers.get(&call.name) else {
            return ToolResult::failure(call.id.clone(), format!("tool '{}' not found", call.name));
        };

        let input = ToolInput {
            call_id: call.id.clone(),
            account_id,
            arguments: call.arguments.clone(),
        };

        tracing::debug!(
            target: TRACING_TARGET_TOOL,
            tool = %call.name,
            call_id = %call.id,
            "Executing tool call"
        );

        match handler(input).await {
            Ok(output) => ToolResult::success(call.id.clone(), output),
            Err(e) => {
                tracing::warn!(
                    target: TRACING_TARGET_TOOL,
                    tool = %call.name,
                    call_id = %call.id,
                    error = %e,
                    "Tool execution failed"
                );
                ToolResult::failure(call.id.clone(), e.to_string())
            }
        }
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("definitions", &self.definitions.keys().collect::<Vec<_>>())
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_tool() -> (ToolDefinition, ToolHandler) {
        let definition = ToolDefinition::new(
            "echo",
            "Echoes its message argument",
            serde_json::json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                },
                "required": ["message"]
            }),
        );
        let handler: ToolHandler = Arc::new(|input| {
            Box::pin(async move {
                let message = input.get_string("message").unwrap_or_default().to_string();
                Ok(ToolOutput::text(message))
            })
        });
        (definition, handler)
    }

    #[tokio::test]
    async fn executes_registered_tool() {
        let mut registry = ToolRegistry::new();
        let (definition, handler) = echo_tool();
        registry.register(definition, handler);

        assert!(registry.has_tool("echo"));
        assert_eq!(registry.len(), 1);

        let call = ToolCall {
            id: "call_1".into(),
            name: "echo".into(),
            arguments: serde_json::json!({"message": "hi"}),
        };

        let result = registry.execute(&call, Uuid::now_v7()).await;
        assert!(!result.is_error);
        assert_eq!(result.to_llm_string(), "hi");
    }

    #[tokio::test]
    async fn unknown_tool_fails_without_panicking() {
        let registry = ToolRegistry::new();

        let call = ToolCall {
            id: "call_1".into(),
            name: "missing".into(),
            arguments: serde_json::json!({}),
        };

        let result = registry.execute(&call, Uuid::now_v7()).await;
        assert!(result.is_error);
    }
}
