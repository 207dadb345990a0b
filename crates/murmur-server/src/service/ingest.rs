//! Attachment ingestion service.
//!
//! Resolves the inline `[FILE: <path>]` marker in a message against the
//! upload storage root. Resolution is infallible by design: any failure
//! while reading or extracting an attachment degrades to the original
//! message text, so attachment problems never block the ability to chat.

use murmur_core::ingest::{
    AttachmentKind, AttachmentMarker, extract_pdf_text, find_marker, invoice_extraction_prompt,
};
use murmur_opendal::{StorageBackend, StorageError};

/// Tracing target for attachment ingestion.
const TRACING_TARGET: &str = "murmur_server::service::ingest";

/// Failure while resolving an attachment; only ever logged.
#[derive(Debug, thiserror::Error)]
enum IngestFailure {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Extraction(#[from] murmur_core::Error),
}

/// Resolves attachment markers in message content.
///
/// Cheap to clone; shares the storage backend handle.
#[derive(Debug, Clone)]
pub struct IngestService {
    storage: StorageBackend,
}

impl IngestService {
    /// Creates an ingest service over the given storage backend.
    pub fn new(storage: StorageBackend) -> Self {
        Self { storage }
    }

    /// Returns the message content to send to the model.
    ///
    /// Messages without a marker come back unchanged. A marker pointing at
    /// a PDF is replaced by the fixed extraction prompt wrapping the
    /// document text; other attachment types pass through unresolved. Any
    /// read or extraction failure is logged and the original content is
    /// returned.
    pub async fn resolve(&self, content: &str) -> String {
        let Some(marker) = find_marker(content) else {
            return content.to_string();
        };

        match marker.kind {
            AttachmentKind::Pdf => match self.extract(&marker).await {
                Ok(prompt) => {
                    tracing::debug!(
                        target: TRACING_TARGET,
                        path = %marker.path,
                        "Attachment substituted with extraction prompt"
                    );
                    prompt
                }
                Err(e) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        path = %marker.path,
                        error = %e,
                        "Attachment ingestion failed, continuing with original message"
                    );
                    content.to_string()
                }
            },
            AttachmentKind::Image | AttachmentKind::Other => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    path = %marker.path,
                    "Attachment type passes through unresolved"
                );
                content.to_string()
            }
        }
    }

    /// Reads the referenced PDF and wraps its text in the extraction
    /// prompt.
    async fn extract(&self, marker: &AttachmentMarker) -> Result<String, IngestFailure> {
        let bytes = self.storage.read(marker.relative_path()).await?;
        let pdf = extract_pdf_text(&bytes)?;

        tracing::debug!(
            target: TRACING_TARGET,
            path = %marker.path,
            pages = pdf.pages,
            text_length = pdf.text.len(),
            "PDF attachment extracted"
        );

        Ok(invoice_extraction_prompt(&pdf.text))
    }
}

#[cfg(test)]
mod tests {
    use murmur_opendal::{FsConfig, StorageConfig};

    use super::*;

    async fn temp_service() -> (tempfile::TempDir, IngestService) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StorageConfig::from(FsConfig::new(dir.path().to_string_lossy()));
        let storage = StorageBackend::new(config).await.expect("backend");
        (dir, IngestService::new(storage))
    }

    #[tokio::test]
    async fn message_without_marker_is_unchanged() {
        let (_dir, service) = temp_service().await;

        let content = "what is the weather like?";
        assert_eq!(service.resolve(content).await, content);
    }

    #[tokio::test]
    async fn missing_file_degrades_to_original() {
        let (_dir, service) = temp_service().await;

        let content = "summarize [FILE: /uploads/absent.pdf] please";
        assert_eq!(service.resolve(content).await, content);
    }

    #[tokio::test]
    async fn corrupt_pdf_degrades_to_original() {
        let (_dir, service) = temp_service().await;
        service
            .storage
            .write("uploads/broken.pdf", b"not a pdf at all")
            .await
            .unwrap();

        let content = "read [FILE: /uploads/broken.pdf]";
        assert_eq!(service.resolve(content).await, content);
    }

    #[tokio::test]
    async fn image_marker_passes_through() {
        let (_dir, service) = temp_service().await;
        service
            .storage
            .write("uploads/photo.png", &[0x89, 0x50, 0x4e, 0x47])
            .await
            .unwrap();

        let content = "look at [FILE: /uploads/photo.png]";
        assert_eq!(service.resolve(content).await, content);
    }
}
