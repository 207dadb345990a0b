//! Chat request types.

use murmur_postgres::types::ChatRole;
use murmur_rig::ChatModel;
use schemars::JsonSchema;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// One message of submitted conversation history.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChatHistoryMessage {
    /// Which side of the conversation produced the message.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatHistoryMessage {
    /// Returns whether this is a user message.
    #[inline]
    pub fn is_user(&self) -> bool {
        self.role.is_user()
    }
}

/// Body of a chat submission.
#[derive(Debug, Clone, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendChatMessage {
    /// Chat identifier; the chat is created on the first message.
    pub id: Uuid,

    /// Conversation history in order, ending with the new user message.
    #[validate(length(min = 1, message = "At least one message is required"))]
    pub messages: Vec<ChatHistoryMessage>,

    /// Model variant to answer with.
    #[serde(default)]
    pub selected_chat_model: ChatModel,
}

impl SendChatMessage {
    /// Returns the most recent user-originated message, if any.
    pub fn most_recent_user_message(&self) -> Option<&ChatHistoryMessage> {
        self.messages.iter().rev().find(|message| message.is_user())
    }
}

/// Query parameters of the chat delete endpoint.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteChatParams {
    /// Chat to delete; a missing id yields 404.
    pub id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: ChatRole, content: &str) -> ChatHistoryMessage {
        ChatHistoryMessage {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn finds_most_recent_user_message() {
        let request = SendChatMessage {
            id: Uuid::now_v7(),
            messages: vec![
                message(ChatRole::User, "first"),
                message(ChatRole::Assistant, "reply"),
                message(ChatRole::User, "second"),
            ],
            selected_chat_model: ChatModel::Small,
        };

        let latest = request.most_recent_user_message().unwrap();
        assert_eq!(latest.content, "second");
    }

    #[test]
    fn assistant_only_history_has_no_user_message() {
        let request = SendChatMessage {
            id: Uuid::now_v7(),
            messages: vec![message(ChatRole::Assistant, "hello")],
            selected_chat_model: ChatModel::Small,
        };

        assert!(request.most_recent_user_message().is_none());
    }

    #[test]
    fn deserializes_camel_case_wire_format() {
        let request: SendChatMessage = serde_json::from_str(
            r#"{
                "id": "0195b4d2-2e6e-7c80-a7cd-3d2cf1d0a9b1",
                "messages": [{"role": "user", "content": "Hello"}],
                "selectedChatModel": "chat-model-reasoning"
            }"#,
        )
        .unwrap();

        assert_eq!(request.selected_chat_model, ChatModel::Reasoning);
        assert!(request.messages[0].is_user());
    }

    #[test]
    fn empty_history_fails_validation() {
        let request = SendChatMessage {
            id: Uuid::now_v7(),
            messages: Vec::new(),
            selected_chat_model: ChatModel::Small,
        };

        assert!(request.validate().is_err());
    }
}
