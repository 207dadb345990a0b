//! Response types for all handlers.

mod chat;
mod error_response;
mod files;
mod monitors;
mod suggestions;

pub use chat::ChatStreamEvent;
pub use error_response::ErrorResponse;
pub use files::UploadedFile;
pub use monitors::Health;
pub use suggestions::Suggestion;
