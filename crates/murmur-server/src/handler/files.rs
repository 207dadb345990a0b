//! Attachment upload handler.
//!
//! Accepts one multipart file per request, validates the declared content
//! type against a fixed allow-list and the size against a fixed ceiling,
//! then stores the bytes under a collision-resistant name in the upload
//! root. Validation is declarative: the declared type is trusted within
//! the allow-list and no content sniffing is performed.

use aide::axum::ApiRouter;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use murmur_opendal::StorageBackend;
use uuid::Uuid;

use crate::extract::{AuthSession, Json};
use crate::handler::response::UploadedFile;
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for upload operations.
const TRACING_TARGET: &str = "murmur_server::handler::files";

/// Upload size ceiling: 10 MiB.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Content types accepted for upload.
const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "application/pdf"];

/// Directory under the storage root uploads are written to.
const UPLOAD_DIR: &str = "uploads";

/// Stores an uploaded attachment.
///
/// Form data: a single `file` part carrying the bytes, declared content
/// type and original filename.
#[tracing::instrument(skip_all, fields(account_id = %session.account_id))]
async fn upload_file(
    State(storage): State<StorageBackend>,
    session: AuthSession,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadedFile>)> {
    tracing::debug!(target: TRACING_TARGET, "Starting file upload");

    let field = loop {
        let Some(field) = multipart.next_field().await.map_err(|err| {
            ErrorKind::BadRequest
                .with_message("Invalid multipart data")
                .with_context(format!("Failed to parse multipart form: {err}"))
        })?
        else {
            return Err(ErrorKind::BadRequest.with_message("No file provided"));
        };

        if field.file_name().is_some() {
            break field;
        }

        tracing::debug!(target: TRACING_TARGET, "Skipping field without filename");
    };

    let original_name = field.file_name().unwrap_or_default().to_string();
    let Some(content_type) = field.content_type().map(str::to_string) else {
        return Err(ErrorKind::BadRequest.with_message("Missing file content type"));
    };

    validate_content_type(&content_type)?;

    let mut data = Vec::new();
    let mut stream = field;

    while let Some(chunk) = stream.chunk().await.map_err(|err| {
        ErrorKind::BadRequest
            .with_message("Failed to read file data")
            .with_context(format!("Could not read file '{original_name}': {err}"))
    })? {
        if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(ErrorKind::BadRequest.with_message("File size should be less than 10MB"));
        }
        data.extend_from_slice(&chunk);
    }

    if data.is_empty() {
        return Err(ErrorKind::BadRequest.with_message("File is empty"));
    }

    let filename = storage_filename(&original_name, &content_type);
    let path = format!("{UPLOAD_DIR}/{filename}");

    storage.write(&path, &data).await?;

    tracing::info!(
        target: TRACING_TARGET,
        filename = %filename,
        content_type = %content_type,
        size = data.len(),
        "File uploaded"
    );

    Ok((
        StatusCode::OK,
        Json(UploadedFile {
            url: format!("/{path}"),
            pathname: filename,
            content_type,
        }),
    ))
}

/// Rejects content types outside the allow-list.
fn validate_content_type(content_type: &str) -> Result<()> {
    if ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Ok(());
    }

    Err(ErrorKind::BadRequest.with_message("File type should be JPEG, PNG or PDF"))
}

/// Generates a collision-resistant storage name preserving the original
/// extension.
fn storage_filename(original_name: &str, content_type: &str) -> String {
    let extension = std::path::Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| default_extension(content_type).to_string());

    format!("{}.{extension}", Uuid::new_v4())
}

/// Extension fallback when the original filename carries none.
fn default_extension(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        _ => "pdf",
    }
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    // Multipart uploads are registered as a plain route; aide cannot
    // describe the multipart body.
    ApiRouter::new()
        .route("/files/upload", axum::routing::post(upload_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_enforced() {
        assert!(validate_content_type("image/jpeg").is_ok());
        assert!(validate_content_type("image/png").is_ok());
        assert!(validate_content_type("application/pdf").is_ok());

        assert!(validate_content_type("image/gif").is_err());
        assert!(validate_content_type("text/html").is_err());
        assert!(validate_content_type("application/octet-stream").is_err());
    }

    #[test]
    fn storage_names_preserve_the_extension() {
        let name = storage_filename("Invoice March.PDF", "application/pdf");
        assert!(name.ends_with(".pdf"));

        let name = storage_filename("photo.jpeg", "image/jpeg");
        assert!(name.ends_with(".jpeg"));
    }

    #[test]
    fn storage_names_fall_back_to_content_type() {
        let name = storage_filename("no-extension", "image/png");
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn storage_names_are_unique() {
        let a = storage_filename("a.pdf", "application/pdf");
        let b = storage_filename("a.pdf", "application/pdf");
        assert_ne!(a, b);
    }
}
