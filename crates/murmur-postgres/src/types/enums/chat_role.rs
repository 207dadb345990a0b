//! Chat role enumeration for message attribution.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Identifies which side of the conversation produced a message.
///
/// Corresponds to the `CHAT_ROLE` PostgreSQL enum. Messages are immutable
/// once stored, so the role never changes after insertion.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::ChatRole"]
pub enum ChatRole {
    /// Message authored by the account holder.
    #[db_rename = "user"]
    #[serde(rename = "user")]
    #[strum(serialize = "user")]
    #[default]
    User,

    /// Message produced by the language model.
    #[db_rename = "assistant"]
    #[serde(rename = "assistant")]
    #[strum(serialize = "assistant")]
    Assistant,
}

impl ChatRole {
    /// Returns whether the message came from the account holder.
    #[inline]
    pub fn is_user(self) -> bool {
        matches!(self, ChatRole::User)
    }

    /// Returns whether the message came from the model.
    #[inline]
    pub fn is_assistant(self) -> bool {
        matches!(self, ChatRole::Assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn parses_from_wire_names() {
        assert_eq!("user".parse::<ChatRole>().unwrap(), ChatRole::User);
        assert_eq!(
            "assistant".parse::<ChatRole>().unwrap(),
            ChatRole::Assistant
        );
    }
}
