//! Database models for all tables.
//!
//! Each model file carries the read model (`Queryable`/`Selectable`), the
//! insertion struct (`Insertable`) and, where the table is mutable, the
//! change set (`AsChangeset`).

mod account;
mod chat;
mod chat_message;
mod document;
mod suggestion;

pub use account::{Account, NewAccount};
pub use chat::{Chat, NewChat};
pub use chat_message::{ChatMessage, NewChatMessage};
pub use document::{Document, NewDocument, UpdateDocument};
pub use suggestion::{NewSuggestion, Suggestion};
