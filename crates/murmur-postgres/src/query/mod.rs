//! Repository traits implemented on the pooled database connection.
//!
//! Each repository groups the queries for one table. The traits are
//! implemented on [`PgConnection`], so any connection obtained from
//! [`PgClient::get_connection`] exposes them directly.
//!
//! [`PgConnection`]: crate::PgConnection
//! [`PgClient::get_connection`]: crate::PgClient::get_connection

mod account;
mod chat;
mod chat_message;
mod document;
mod suggestion;

pub use account::AccountRepository;
pub use chat::ChatRepository;
pub use chat_message::ChatMessageRepository;
pub use document::DocumentRepository;
pub use suggestion::SuggestionRepository;
