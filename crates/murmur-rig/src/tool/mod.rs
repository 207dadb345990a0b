//! Named callable capabilities the model may invoke mid-stream.
//!
//! Tools are registered in a [`ToolRegistry`] as a definition (name,
//! description, JSON parameter schema) plus an async handler. The agent
//! loop advertises the definitions to the model and dispatches tool calls
//! through the registry, so tools can be added without touching the
//! orchestration code.

pub mod builtin;
mod definition;
mod registry;
mod types;

pub use definition::ToolDefinition;
pub use registry::{ToolHandler, ToolRegistry};
pub use types::{ToolCall, ToolInput, ToolOutput, ToolResult};
