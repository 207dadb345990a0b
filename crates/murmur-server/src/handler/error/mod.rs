//! Error types shared by all handlers.

mod http_error;
mod pg_error;
mod rig_error;
mod storage_error;

pub use http_error::{Error, ErrorKind, Result};
