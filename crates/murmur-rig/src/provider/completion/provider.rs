//! Completion provider abstraction.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream::BoxStream;
use rig::completion::{
    AssistantContent, CompletionError, CompletionModel as RigCompletionModel, CompletionRequest,
};
use rig::message::Message;
use rig::one_or_many::OneOrMany;
use rig::prelude::CompletionClient;
use rig::providers::{anthropic, openai};

use super::credentials::Credentials;
use super::model::ChatModel;
use super::response::StreamFragment;
use crate::{Error, Result, TRACING_TARGET_PROVIDER};

/// Completion provider that wraps different rig completion model
/// implementations.
///
/// This is a cheaply cloneable wrapper around an `Arc<CompletionService>`.
#[derive(Clone)]
pub struct CompletionProvider(Arc<CompletionService>);

pub(crate) enum CompletionService {
    OpenAi {
        model: openai::CompletionModel,
        model_name: String,
    },
    Anthropic {
        model: anthropic::completion::CompletionModel,
        model_name: String,
    },
}

impl CompletionProvider {
    /// Connects the completion model a chat variant resolves to under the
    /// given credentials.
    pub fn connect(credentials: &Credentials, chat_model: ChatModel) -> Result<Self> {
        match credentials {
            Credentials::OpenAi { api_key } => {
                Self::openai(api_key, chat_model.openai_model_id())
            }
            Credentials::Anthropic { api_key } => {
                Self::anthropic(api_key, chat_model.anthropic_model_id())
            }
        }
    }

    /// Creates an OpenAI completion provider with a specific model.
    pub fn openai(api_key: &str, model_name: &str) -> Result<Self> {
        let client = openai::Client::new(api_key)
            .map_err(|e| Error::provider("openai", e.to_string()))?
            .completions_api();
        Ok(Self(Arc::new(CompletionService::OpenAi {
            model: client.completion_model(model_name),
            model_name: model_name.to_string(),
        })))
    }

    /// Creates an Anthropic completion provider with a specific model.
    pub fn anthropic(api_key: &str, model_name: &str) -> Result<Self> {
        let client = anthropic::Client::new(api_key)
            .map_err(|e| Error::provider("anthropic", e.to_string()))?;
        Ok(Self(Arc::new(CompletionService::Anthropic {
            model: client.completion_model(model_name),
            model_name: model_name.to_string(),
        })))
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        match self.0.as_ref() {
            CompletionService::OpenAi { model_name, .. } => model_name,
            CompletionService::Anthropic { model_name, .. } => model_name,
        }
    }

    /// Returns the provider name.
    pub fn provider_name(&self) -> &'static str {
        match self.0.as_ref() {
            CompletionService::OpenAi { .. } => "openai",
            CompletionService::Anthropic { .. } => "anthropic",
        }
    }

    /// Sends a non-streaming completion request.
    ///
    /// Used for one-shot generations such as chat titles.
    pub async fn complete(
        &self,
        preamble: Option<&str>,
        prompt: &str,
        chat_history: Vec<Message>,
    ) -> Result<String> {
        let model_name = self.model_name().to_string();
        let map_err =
            move |e: CompletionError| Error::provider(&model_name, e.to_string());

        match self.0.as_ref() {
            CompletionService::OpenAi { model, .. } => {
                let mut builder = model.completion_request(prompt).messages(chat_history);
                if let Some(preamble) = preamble {
                    builder = builder.preamble(preamble.to_string());
                }
                builder
                    .send()
                    .await
                    .map(|r| extract_text_content(&r.choice))
                    .map_err(map_err)
            }
            CompletionService::Anthropic { model, .. } => {
                let mut builder = model.completion_request(prompt).messages(chat_history);
                if let Some(preamble) = preamble {
                    builder = builder.preamble(preamble.to_string());
                }
                builder
                    .send()
                    .await
                    .map(|r| extract_text_content(&r.choice))
                    .map_err(map_err)
            }
        }
    }

    /// Starts a streaming completion and returns the fragment stream.
    ///
    /// The provider-specific response type is erased so that callers see one
    /// uniform [`StreamFragment`] sequence regardless of the backing model.
    pub async fn stream_fragments(
        &self,
        request: CompletionRequest,
    ) -> Result<BoxStream<'static, Result<StreamFragment>>> {
        let model_name = self.model_name().to_string();

        tracing::debug!(
            target: TRACING_TARGET_PROVIDER,
            provider = self.provider_name(),
            model = %model_name,
            "Starting streaming completion"
        );

        match self.0.as_ref() {
            CompletionService::OpenAi { model, .. } => {
                let stream = model
                    .stream(request)
                    .await
                    .map_err(|e| Error::provider(&model_name, e.to_string()))?;
                Ok(stream
                    .map(move |chunk| {
                        chunk
                            .map(StreamFragment::from_content)
                            .map_err(|e| Error::provider(&model_name, e.to_string()))
                    })
                    .boxed())
            }
            CompletionService::Anthropic { model, .. } => {
                let stream = model
                    .stream(request)
                    .await
                    .map_err(|e| Error::provider(&model_name, e.to_string()))?;
                Ok(stream
                    .map(move |chunk| {
                        chunk
                            .map(StreamFragment::from_content)
                            .map_err(|e| Error::provider(&model_name, e.to_string()))
                    })
                    .boxed())
            }
        }
    }
}

/// Extracts text content from assistant content choices.
fn extract_text_content(choice: &OneOrMany<AssistantContent>) -> String {
    choice
        .iter()
        .filter_map(|content| match content {
            AssistantContent::Text(text) => Some(text.text()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("")
}

impl std::fmt::Debug for CompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.as_ref() {
            CompletionService::OpenAi { model_name, .. } => f
                .debug_struct("CompletionProvider::OpenAi")
                .field("model", model_name)
                .finish(),
            CompletionService::Anthropic { model_name, .. } => f
                .debug_struct("CompletionProvider::Anthropic")
                .field("model", model_name)
                .finish(),
        }
    }
}
