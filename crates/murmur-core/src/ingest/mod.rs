//! Attachment ingestion primitives.
//!
//! A chat message may reference a previously uploaded file through an inline
//! marker of the form `[FILE: <path>]`. This module provides the pieces a
//! caller needs to resolve such a marker:
//!
//! - [`find_marker`] - locates the (single) marker inside message text
//! - [`extract_pdf_text`] - pulls page text out of a PDF, in page order
//! - [`invoice_extraction_prompt`] - wraps extracted text in the fixed
//!   analysis prompt sent to the model
//!
//! Reading the referenced bytes from storage is the caller's concern; these
//! functions are pure over text and byte slices.

mod marker;
mod pdf;
mod prompt;

pub use marker::{AttachmentKind, AttachmentMarker, find_marker};
pub use pdf::{PdfText, extract_pdf_text};
pub use prompt::invoice_extraction_prompt;
