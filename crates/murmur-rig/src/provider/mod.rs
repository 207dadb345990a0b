//! Completion provider abstractions over rig-core.

mod completion;
mod registry;

pub use completion::{ChatModel, CompletionProvider, Credentials, StreamFragment};
pub use registry::ProviderRegistry;
