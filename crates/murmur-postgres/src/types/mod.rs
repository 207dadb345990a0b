//! Contains enumerations and other custom types.

mod enums;

pub use enums::ChatRole;
