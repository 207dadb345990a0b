#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
pub mod ingest;

pub use crate::error::{BoxedError, Error, ErrorKind, Result};

/// Tracing target for attachment ingestion operations.
pub const TRACING_TARGET_INGEST: &str = "murmur_core::ingest";
