//! PDF text extraction.

use lopdf::Document;

use crate::{Error, Result, TRACING_TARGET_INGEST};

/// Text extracted from a PDF document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfText {
    /// Number of pages in the document.
    pub pages: usize,
    /// Concatenated page text, in page order, pages separated by newlines.
    pub text: String,
}

/// Extracts text from every page of a PDF, in page order.
///
/// Encrypted, truncated, or otherwise unreadable documents produce an
/// extraction error; a page that yields no text contributes an empty line
/// rather than failing the whole document.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<PdfText> {
    if bytes.is_empty() {
        return Err(Error::invalid_input().with_message("empty PDF payload"));
    }

    let document = Document::load_mem(bytes).map_err(|err| {
        Error::extraction()
            .with_message("failed to parse PDF document")
            .with_source(err)
    })?;

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    let mut text = String::new();

    for page_number in &page_numbers {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_INGEST,
                    page = page_number,
                    error = %err,
                    "skipping unreadable PDF page"
                );
                text.push('\n');
            }
        }
    }

    tracing::debug!(
        target: TRACING_TARGET_INGEST,
        pages = page_numbers.len(),
        text_length = text.len(),
        "PDF text extracted"
    );

    Ok(PdfText {
        pages: page_numbers.len(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_invalid_input() {
        let error = extract_pdf_text(&[]).unwrap_err();
        assert_eq!(error.kind, crate::ErrorKind::InvalidInput);
    }

    #[test]
    fn garbage_bytes_fail_extraction() {
        let error = extract_pdf_text(b"definitely not a pdf").unwrap_err();
        assert_eq!(error.kind, crate::ErrorKind::Extraction);
    }
}
