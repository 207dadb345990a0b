//! Provider credentials.

/// Credentials for a hosted completion provider.
///
/// Kept separate from [`ChatModel`] so that non-sensitive model selection
/// and sensitive key material travel through different code paths.
///
/// [`ChatModel`]: super::ChatModel
#[derive(Clone)]
pub enum Credentials {
    /// OpenAI API key.
    OpenAi { api_key: String },
    /// Anthropic API key.
    Anthropic { api_key: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAi { .. } => f.debug_struct("Credentials::OpenAi").finish_non_exhaustive(),
            Self::Anthropic { .. } => f
                .debug_struct("Credentials::Anthropic")
                .finish_non_exhaustive(),
        }
    }
}
