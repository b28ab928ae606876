// ============================================================================
// Document Converter Interface
// Defines the contract for pluggable document-to-markdown converters
// ============================================================================

use crate::document::DocumentResult;
use crate::domain::ConvertedDocument;
use std::path::Path;

/// Strategy interface for converting one family of document formats.
/// Implementations: MarkdownConverter (plain text and markdown).
pub trait DocumentConverter: Send + Sync {
    /// Converter name for logging
    fn name(&self) -> &str;

    /// File extensions (lowercase, without the dot) this converter accepts
    fn extensions(&self) -> &[&str];

    /// Convert the file at `path` into markdown text
    ///
    /// # Arguments
    /// * `path` - A regular file that already passed size checks
    fn convert(&self, path: &Path) -> DocumentResult<ConvertedDocument>;

    /// Whether this converter handles `path`.
    /// Default implementation matches the extension case-insensitively.
    fn supports(&self, path: &Path) -> bool {
        let ext = extension_of(path);
        self.extensions().iter().any(|e| *e == ext)
    }
}

/// Lowercase extension of `path`, empty if it has none
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}
