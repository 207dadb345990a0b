#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod chat;
mod config;
mod error;
pub mod provider;
pub mod tool;

pub use crate::chat::{ChatEvent, ChatRequest, ChatResponse, ChatService, ChatStream, ChatTurn};
pub use crate::config::RigConfig;
pub use crate::error::{Error, Result};
pub use crate::provider::{ChatModel, CompletionProvider, Credentials, ProviderRegistry};

/// Tracing target for chat streaming operations.
pub const TRACING_TARGET_CHAT: &str = "murmur_rig::chat";

/// Tracing target for provider operations.
pub const TRACING_TARGET_PROVIDER: &str = "murmur_rig::provider";

/// Tracing target for tool execution.
pub const TRACING_TARGET_TOOL: &str = "murmur_rig::tool";
