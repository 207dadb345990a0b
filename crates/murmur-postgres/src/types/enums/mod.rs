//! Database enumeration types.

mod chat_role;

pub use chat_role::ChatRole;
