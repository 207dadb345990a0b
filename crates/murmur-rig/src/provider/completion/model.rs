//! Chat model variants.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Model variant a chat request selects.
///
/// The wire names match what the client sends in `selectedChatModel`; the
/// concrete provider model ids are an implementation detail resolved here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
pub enum ChatModel {
    /// Fast, inexpensive conversational model.
    #[serde(rename = "chat-model-small")]
    #[strum(serialize = "chat-model-small")]
    #[default]
    Small,

    /// Higher-quality conversational model.
    #[serde(rename = "chat-model-large")]
    #[strum(serialize = "chat-model-large")]
    Large,

    /// Reasoning model; emits thinking fragments and runs without tools.
    #[serde(rename = "chat-model-reasoning")]
    #[strum(serialize = "chat-model-reasoning")]
    Reasoning,
}

impl ChatModel {
    /// Returns whether this is the reasoning variant.
    ///
    /// The reasoning variant is invoked with an empty tool set.
    #[inline]
    pub fn is_reasoning(self) -> bool {
        matches!(self, ChatModel::Reasoning)
    }

    /// OpenAI model id for this variant.
    pub fn openai_model_id(self) -> &'static str {
        match self {
            ChatModel::Small => "gpt-4o-mini",
            ChatModel::Large => "gpt-4o",
            ChatModel::Reasoning => "o1-mini",
        }
    }

    /// Anthropic model id for this variant.
    pub fn anthropic_model_id(self) -> &'static str {
        match self {
            ChatModel::Small => "claude-3-5-haiku-latest",
            ChatModel::Large => "claude-sonnet-4-20250514",
            ChatModel::Reasoning => "claude-sonnet-4-20250514",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_roundtrip() {
        let json = serde_json::to_string(&ChatModel::Reasoning).unwrap();
        assert_eq!(json, "\"chat-model-reasoning\"");

        let parsed: ChatModel = serde_json::from_str("\"chat-model-small\"").unwrap();
        assert_eq!(parsed, ChatModel::Small);
    }

    #[test]
    fn only_reasoning_variant_is_reasoning() {
        assert!(!ChatModel::Small.is_reasoning());
        assert!(!ChatModel::Large.is_reasoning());
        assert!(ChatModel::Reasoning.is_reasoning());
    }
}
