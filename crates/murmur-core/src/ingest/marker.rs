//! Inline attachment marker parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the inline file reference embedded in message text.
///
/// Non-greedy so that trailing text after the closing bracket is never
/// swallowed. Only the first occurrence in a message is recognized.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[FILE: (.*?)\]").expect("attachment marker regex is valid"));

/// Classification of an attachment by its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// A PDF document, eligible for text extraction.
    Pdf,
    /// A raster image (JPEG/PNG).
    Image,
    /// Anything else; passed through unresolved.
    Other,
}

impl AttachmentKind {
    /// Classifies a path by its extension, case-insensitively.
    pub fn from_path(path: &str) -> Self {
        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("jpg" | "jpeg" | "png") => Self::Image,
            _ => Self::Other,
        }
    }
}

/// A resolved attachment marker within message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentMarker {
    /// Path as written inside the marker, relative to the public root.
    pub path: String,
    /// Attachment classification derived from the path.
    pub kind: AttachmentKind,
}

impl AttachmentMarker {
    /// Returns the marker path with any leading slash removed, suitable for
    /// joining against a storage root.
    pub fn relative_path(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}

/// Finds the first attachment marker in the given message content.
///
/// Returns `None` when the content contains no marker; subsequent markers
/// in the same message are ignored.
pub fn find_marker(content: &str) -> Option<AttachmentMarker> {
    let captures = MARKER.captures(content)?;
    let path = captures.get(1)?.as_str().to_string();
    let kind = AttachmentKind::from_path(&path);

    Some(AttachmentMarker { path, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pdf_marker() {
        let marker = find_marker("please read [FILE: /uploads/invoice.pdf] for me").unwrap();
        assert_eq!(marker.path, "/uploads/invoice.pdf");
        assert_eq!(marker.kind, AttachmentKind::Pdf);
        assert_eq!(marker.relative_path(), "uploads/invoice.pdf");
    }

    #[test]
    fn marker_is_non_greedy() {
        let marker = find_marker("[FILE: a.pdf] and [FILE: b.pdf]").unwrap();
        assert_eq!(marker.path, "a.pdf");
    }

    #[test]
    fn no_marker_returns_none() {
        assert_eq!(find_marker("just a plain message"), None);
        assert_eq!(find_marker("[FILE missing colon]"), None);
    }

    #[test]
    fn classifies_by_extension() {
        assert_eq!(AttachmentKind::from_path("a.PDF"), AttachmentKind::Pdf);
        assert_eq!(AttachmentKind::from_path("a.jpeg"), AttachmentKind::Image);
        assert_eq!(AttachmentKind::from_path("a.png"), AttachmentKind::Image);
        assert_eq!(AttachmentKind::from_path("notes.txt"), AttachmentKind::Other);
        assert_eq!(AttachmentKind::from_path("no-extension"), AttachmentKind::Other);
    }
}
