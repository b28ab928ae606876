// ============================================================================
// PDF Converter
// Extracts the text layer of a PDF with pdf-extract
// ============================================================================

use super::errors::{ConversionError, DocumentResult};
use crate::domain::ConvertedDocument;
use crate::interfaces::DocumentConverter;
use std::fs;
use std::panic;
use std::path::Path;

/// Converter for `.pdf` files.
///
/// Only the text layer is read: scanned or image-only PDFs fail with
/// `ConversionError::Extraction`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfConverter;

impl PdfConverter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for PdfConverter {
    fn name(&self) -> &str {
        "pdf"
    }

    fn extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn convert(&self, path: &Path) -> DocumentResult<ConvertedDocument> {
        let bytes = fs::read(path)?;
        let text = extract_text(&bytes)?;
        Ok(ConvertedDocument::new(text, None))
    }
}

/// Extract the text of an in-memory PDF, one paragraph per non-empty run
/// of lines.
pub fn extract_text(bytes: &[u8]) -> DocumentResult<String> {
    // pdf-extract panics on some malformed documents
    let raw = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ConversionError::Extraction("malformed PDF".to_string()))?
        .map_err(|e| ConversionError::Extraction(e.to_string()))?;

    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(ConversionError::Extraction(
            "no extractable text (scanned or image-only PDF?)".to_string(),
        ));
    }
    Ok(text)
}

/// Trim every line and collapse runs of blank lines into one.
fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_blank = false;
    for line in raw.lines().map(str::trim) {
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
