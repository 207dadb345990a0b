#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod backend;
mod config;
mod error;

pub use backend::{FileMetadata, StorageBackend};
pub use config::StorageConfig;
#[cfg(feature = "fs")]
pub use config::FsConfig;
#[cfg(feature = "s3")]
pub use config::S3Config;
pub use error::{StorageError, StorageResult};

/// Tracing target for storage operations.
pub const TRACING_TARGET: &str = "murmur_opendal";
