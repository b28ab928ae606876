// ============================================================================
// Conversion Errors
// Failures while reading or converting a document
// ============================================================================

use std::fmt;
use std::io;

/// Errors that can occur while converting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Path does not exist
    NotFound,
    /// Path exists but is not a regular file
    NotAFile,
    /// File exceeds the configured size limit
    TooLarge { size: u64, limit: u64 },
    /// No registered converter handles this extension
    Unsupported(String),
    /// File content is not valid UTF-8
    InvalidUtf8,
    /// Text could not be extracted from a binary format
    Extraction(String),
    /// Any other I/O failure
    Io(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NotFound => write!(f, "file not found"),
            ConversionError::NotAFile => write!(f, "path is not a regular file"),
            ConversionError::TooLarge { size, limit } => {
                write!(f, "file too large: {} bytes exceeds limit of {} bytes", size, limit)
            },
            ConversionError::Unsupported(ext) if ext.is_empty() => {
                write!(f, "unsupported document type: no file extension")
            },
            ConversionError::Unsupported(ext) => write!(f, "unsupported document type: .{}", ext),
            ConversionError::InvalidUtf8 => write!(f, "document is not valid UTF-8"),
            ConversionError::Extraction(msg) => write!(f, "text extraction failed: {}", msg),
            ConversionError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<io::Error> for ConversionError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ConversionError::NotFound,
            io::ErrorKind::InvalidData => ConversionError::InvalidUtf8,
            _ => ConversionError::Io(err.to_string()),
        }
    }
}

/// Result type alias for document conversion
pub type DocumentResult<T> = Result<T, ConversionError>;
