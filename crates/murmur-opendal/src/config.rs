//! Storage configuration types.

use serde::{Deserialize, Serialize};

/// Storage backend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum StorageConfig {
    /// Local filesystem storage.
    #[cfg(feature = "fs")]
    Fs(FsConfig),
    /// Amazon S3 compatible storage.
    #[cfg(feature = "s3")]
    S3(S3Config),
}

impl StorageConfig {
    /// Returns the backend name as a static string.
    pub fn backend_name(&self) -> &'static str {
        match self {
            #[cfg(feature = "fs")]
            Self::Fs(_) => "fs",
            #[cfg(feature = "s3")]
            Self::S3(_) => "s3",
        }
    }

    /// Returns the storage root (directory or bucket).
    pub fn root(&self) -> &str {
        match self {
            #[cfg(feature = "fs")]
            Self::Fs(config) => &config.root,
            #[cfg(feature = "s3")]
            Self::S3(config) => &config.bucket,
        }
    }
}

#[cfg(feature = "fs")]
impl From<FsConfig> for StorageConfig {
    fn from(config: FsConfig) -> Self {
        Self::Fs(config)
    }
}

#[cfg(feature = "s3")]
impl From<S3Config> for StorageConfig {
    fn from(config: S3Config) -> Self {
        Self::S3(config)
    }
}

/// Local filesystem backend configuration.
#[cfg(feature = "fs")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsConfig {
    /// Root directory all paths are resolved against.
    pub root: String,
}

#[cfg(feature = "fs")]
impl FsConfig {
    /// Creates a filesystem configuration rooted at the given directory.
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

/// Amazon S3 backend configuration.
#[cfg(feature = "s3")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Config {
    /// Bucket name.
    pub bucket: String,
    /// AWS region.
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible services.
    pub endpoint: Option<String>,
    /// Access key id; falls back to the ambient credential chain.
    pub access_key_id: Option<String>,
    /// Secret access key; falls back to the ambient credential chain.
    pub secret_access_key: Option<String>,
}

#[cfg(feature = "s3")]
impl S3Config {
    /// Creates an S3 configuration for the given bucket.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: None,
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
        }
    }

    /// Sets the AWS region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets a custom endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "fs")]
    #[test]
    fn fs_config_roundtrip() {
        let config = StorageConfig::from(FsConfig::new("/var/lib/murmur/public"));
        assert_eq!(config.backend_name(), "fs");
        assert_eq!(config.root(), "/var/lib/murmur/public");

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"type\":\"fs\""));
    }
}
