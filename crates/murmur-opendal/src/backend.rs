//! Storage backend implementation.

use opendal::{Operator, services};

use crate::TRACING_TARGET;
use crate::config::StorageConfig;
use crate::error::{StorageError, StorageResult};

/// Unified storage backend that wraps OpenDAL operators.
#[derive(Clone)]
pub struct StorageBackend {
    operator: Operator,
    config: StorageConfig,
}

impl StorageBackend {
    /// Creates a new storage backend from configuration.
    pub async fn new(config: StorageConfig) -> StorageResult<Self> {
        let operator = Self::create_operator(&config)?;

        tracing::info!(
            target: TRACING_TARGET,
            backend = config.backend_name(),
            root = %config.root(),
            "Storage backend initialized"
        );

        Ok(Self { operator, config })
    }

    /// Returns the configuration for this backend.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Reads a file from storage.
    pub async fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "Reading file"
        );

        let data = self.operator.read(path).await?.to_vec();

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            size = data.len(),
            "File read complete"
        );

        Ok(data)
    }

    /// Writes data to a file in storage.
    pub async fn write(&self, path: &str, data: &[u8]) -> StorageResult<()> {
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            size = data.len(),
            "Writing file"
        );

        self.operator.write(path, data.to_vec()).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "File write complete"
        );

        Ok(())
    }

    /// Deletes a file from storage.
    pub async fn delete(&self, path: &str) -> StorageResult<()> {
        tracing::debug!(
            target: TRACING_TARGET,
            path = %path,
            "Deleting file"
        );

        self.operator.delete(path).await?;

        Ok(())
    }

    /// Checks if a file exists.
    pub async fn exists(&self, path: &str) -> StorageResult<bool> {
        Ok(self.operator.exists(path).await?)
    }

    /// Gets metadata for a file.
    pub async fn stat(&self, path: &str) -> StorageResult<FileMetadata> {
        let meta = self.operator.stat(path).await?;

        // Convert chrono DateTime to jiff Timestamp
        let last_modified = meta
            .last_modified()
            .and_then(|dt| jiff::Timestamp::from_second(dt.timestamp()).ok());

        Ok(FileMetadata {
            size: meta.content_length(),
            last_modified,
            content_type: meta.content_type().map(|s| s.to_string()),
        })
    }

    /// Creates an OpenDAL operator based on configuration.
    fn create_operator(config: &StorageConfig) -> StorageResult<Operator> {
        match config {
            #[cfg(feature = "fs")]
            StorageConfig::Fs(fs_config) => {
                let builder = services::Fs::default().root(&fs_config.root);

                Operator::new(builder)
                    .map(|op| op.finish())
                    .map_err(|e| StorageError::init(e.to_string()))
            }

            #[cfg(feature = "s3")]
            StorageConfig::S3(s3_config) => {
                let mut builder = services::S3::default().bucket(&s3_config.bucket);

                if let Some(ref region) = s3_config.region {
                    builder = builder.region(region);
                }

                if let Some(ref endpoint) = s3_config.endpoint {
                    builder = builder.endpoint(endpoint);
                }

                if let Some(ref access_key_id) = s3_config.access_key_id {
                    builder = builder.access_key_id(access_key_id);
                }

                if let Some(ref secret_access_key) = s3_config.secret_access_key {
                    builder = builder.secret_access_key(secret_access_key);
                }

                Operator::new(builder)
                    .map(|op| op.finish())
                    .map_err(|e| StorageError::init(e.to_string()))
            }
        }
    }
}

/// File metadata.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// File size in bytes.
    pub size: u64,
    /// Last modification time.
    pub last_modified: Option<jiff::Timestamp>,
    /// Content type / MIME type.
    pub content_type: Option<String>,
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBackend")
            .field("backend", &self.config.backend_name())
            .field("root", &self.config.root())
            .finish()
    }
}

#[cfg(all(test, feature = "fs"))]
mod tests {
    use super::*;
    use crate::config::FsConfig;

    async fn temp_backend() -> (tempfile::TempDir, StorageBackend) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StorageConfig::from(FsConfig::new(dir.path().to_string_lossy()));
        let backend = StorageBackend::new(config).await.expect("backend");
        (dir, backend)
    }

    #[tokio::test]
    async fn write_then_read_roundtrip() {
        let (_dir, backend) = temp_backend().await;

        backend.write("uploads/a.txt", b"hello").await.unwrap();
        assert!(backend.exists("uploads/a.txt").await.unwrap());
        assert_eq!(backend.read("uploads/a.txt").await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let (_dir, backend) = temp_backend().await;

        let error = backend.read("uploads/absent.pdf").await.unwrap_err();
        assert!(error.is_not_found());
    }
}
