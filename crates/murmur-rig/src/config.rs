//! Language-model configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::provider::Credentials;
use crate::{Error, Result};

/// Which hosted provider backs the completion models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// OpenAI completion models.
    OpenAi,
    /// Anthropic completion models.
    Anthropic,
}

/// Configuration for the language-model integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct RigConfig {
    /// Hosted provider backing all model variants (`openai` or `anthropic`)
    #[cfg_attr(
        feature = "config",
        arg(long = "llm-provider", env = "LLM_PROVIDER", default_value = "openai")
    )]
    pub llm_provider: String,

    /// API key for the selected provider
    #[cfg_attr(feature = "config", arg(long = "llm-api-key", env = "LLM_API_KEY"))]
    pub llm_api_key: String,
}

impl RigConfig {
    /// Creates a configuration for the given provider name and API key.
    pub fn new(provider: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            llm_provider: provider.into(),
            llm_api_key: api_key.into(),
        }
    }

    /// Parses the configured provider name.
    pub fn provider_kind(&self) -> Result<ProviderKind> {
        self.llm_provider
            .parse()
            .map_err(|_| Error::config(format!("unknown LLM provider '{}'", self.llm_provider)))
    }

    /// Builds credentials for the configured provider.
    pub fn credentials(&self) -> Result<Credentials> {
        if self.llm_api_key.is_empty() {
            return Err(Error::config("LLM API key is empty"));
        }

        Ok(match self.provider_kind()? {
            ProviderKind::OpenAi => Credentials::OpenAi {
                api_key: self.llm_api_key.clone(),
            },
            ProviderKind::Anthropic => Credentials::Anthropic {
                api_key: self.llm_api_key.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_kind() {
        let config = RigConfig::new("openai", "sk-test");
        assert_eq!(config.provider_kind().unwrap(), ProviderKind::OpenAi);

        let config = RigConfig::new("Anthropic", "key");
        assert_eq!(config.provider_kind().unwrap(), ProviderKind::Anthropic);

        let config = RigConfig::new("yodel", "key");
        assert!(config.provider_kind().is_err());
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let config = RigConfig::new("openai", "");
        assert!(config.credentials().is_err());
    }
}
