//! Chat service for streamed conversations.

use std::sync::Arc;

use murmur_postgres::types::ChatRole;
use rig::message::Message;
use uuid::Uuid;

use super::{AgentExecutor, ChatStream, TITLE_PROMPT, system_prompt, title_fallback};
use crate::provider::{ChatModel, ProviderRegistry};
use crate::tool::ToolRegistry;
use crate::{Result, TRACING_TARGET_CHAT};

/// One turn of conversation history submitted with a chat request.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    /// Which side of the conversation produced the turn.
    pub role: ChatRole,
    /// Turn text.
    pub content: String,
}

impl ChatTurn {
    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A chat request ready for model invocation.
///
/// `history` is the full message sequence in conversational order,
/// including the (possibly attachment-substituted) latest user message.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Chat this request belongs to.
    pub chat_id: Uuid,
    /// Account on whose behalf tools execute.
    pub account_id: Uuid,
    /// Selected model variant.
    pub model: ChatModel,
    /// Conversation history, oldest first.
    pub history: Vec<ChatTurn>,
}

/// Inner state for [`ChatService`].
struct ChatServiceInner {
    providers: ProviderRegistry,
    tools: ToolRegistry,
}

/// Chat service producing streamed assistant responses.
///
/// This type is cheap to clone and can be shared across threads.
#[derive(Clone)]
pub struct ChatService {
    inner: Arc<ChatServiceInner>,
}

impl ChatService {
    /// Creates a new chat service.
    pub fn new(providers: ProviderRegistry, tools: ToolRegistry) -> Self {
        Self {
            inner: Arc::new(ChatServiceInner { providers, tools }),
        }
    }

    /// Starts a streamed response for the given request.
    ///
    /// The stream emits [`ChatEvent`](super::ChatEvent)s as the agent
    /// processes the request: reasoning and text deltas, tool calls and
    /// their results, and the final `Done` event.
    pub async fn respond(&self, request: ChatRequest) -> Result<ChatStream> {
        let provider = self.inner.providers.resolve(request.model)?.clone();

        // The reasoning variant runs without tools.
        let tools = if request.model.is_reasoning() {
            ToolRegistry::new()
        } else {
            self.inner.tools.clone()
        };

        tracing::debug!(
            target: TRACING_TARGET_CHAT,
            chat_id = %request.chat_id,
            model = %request.model,
            history_len = request.history.len(),
            tool_count = tools.len(),
            "Starting chat response"
        );

        let executor = AgentExecutor::new(
            provider,
            tools,
            request.model,
            system_prompt(request.model),
            into_rig_history(&request.history),
            request.account_id,
        );

        Ok(ChatStream::new(request.chat_id, executor.run()))
    }

    /// Generates a short chat title from the first user message.
    pub async fn generate_title(&self, message: &str) -> Result<String> {
        let provider = self.inner.providers.title_provider()?;
        let title = provider
            .complete(Some(TITLE_PROMPT), message, Vec::new())
            .await?;
        Ok(title.trim().to_string())
    }

    /// Generates a chat title, falling back to a truncated copy of the
    /// message when generation fails.
    ///
    /// Chat creation must never fail on the title path.
    pub async fn title_or_fallback(&self, message: &str) -> String {
        match self.generate_title(message).await {
            Ok(title) if !title.is_empty() => title,
            Ok(_) => title_fallback(message),
            Err(e) => {
                tracing::warn!(
                    target: TRACING_TARGET_CHAT,
                    error = %e,
                    "Title generation failed, using fallback"
                );
                title_fallback(message)
            }
        }
    }

    /// Returns a reference to the provider registry.
    pub fn providers(&self) -> &ProviderRegistry {
        &self.inner.providers
    }

    /// Returns a reference to the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.inner.tools
    }
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService")
            .field("providers", &self.inner.providers)
            .field("tools", &self.inner.tools)
            .finish()
    }
}

/// Maps conversation history onto rig messages.
fn into_rig_history(history: &[ChatTurn]) -> Vec<Message> {
    history
        .iter()
        .map(|turn| match turn.role {
            ChatRole::User => Message::user(turn.content.clone()),
            ChatRole::Assistant => Message::assistant(turn.content.clone()),
        })
        .collect()
}
