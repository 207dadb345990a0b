//! Request types for all handlers.

mod chat;
mod suggestions;

pub use chat::{ChatHistoryMessage, DeleteChatParams, SendChatMessage};
pub use suggestions::SuggestionsParams;
