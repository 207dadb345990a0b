//! Registry of connected completion providers.

use std::collections::HashMap;
use std::sync::Arc;

use strum::IntoEnumIterator;

use super::completion::{ChatModel, CompletionProvider, Credentials};
use crate::{Error, Result, TRACING_TARGET_PROVIDER};

/// Connected completion providers, one per chat model variant.
///
/// Built once at startup so request handling never constructs clients.
/// Cheap to clone and share across threads.
#[derive(Clone)]
pub struct ProviderRegistry {
    inner: Arc<HashMap<ChatModel, CompletionProvider>>,
}

impl ProviderRegistry {
    /// Connects a provider for every chat model variant.
    pub fn connect(credentials: &Credentials) -> Result<Self> {
        let mut providers = HashMap::new();

        for chat_model in ChatModel::iter() {
            let provider = CompletionProvider::connect(credentials, chat_model)?;

            tracing::info!(
                target: TRACING_TARGET_PROVIDER,
                variant = %chat_model,
                provider = provider.provider_name(),
                model = provider.model_name(),
                "Connected completion provider"
            );

            providers.insert(chat_model, provider);
        }

        Ok(Self {
            inner: Arc::new(providers),
        })
    }

    /// Resolves the provider for a chat model variant.
    pub fn resolve(&self, chat_model: ChatModel) -> Result<&CompletionProvider> {
        self.inner
            .get(&chat_model)
            .ok_or_else(|| Error::config(format!("no provider connected for '{chat_model}'")))
    }

    /// Returns the provider used for auxiliary one-shot generations such as
    /// chat titles.
    pub fn title_provider(&self) -> Result<&CompletionProvider> {
        self.resolve(ChatModel::Small)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("variants", &self.inner.keys().collect::<Vec<_>>())
            .finish()
    }
}
