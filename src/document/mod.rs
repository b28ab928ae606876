// ============================================================================
// Document Module
// File-to-markdown conversion, independent of the arithmetic core
// ============================================================================

mod errors;
mod markdown;
mod pdf;
mod processor;
mod sample;

pub use errors::{ConversionError, DocumentResult};
pub use markdown::{first_heading, MarkdownConverter};
pub use pdf::{extract_text, PdfConverter};
pub use processor::{convert_document_to_markdown, DocumentProcessor};
pub use sample::{sample_markdown, write_sample_document, SAMPLE_FILE_NAME, SAMPLE_TITLE};
