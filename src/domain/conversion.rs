// ============================================================================
// Conversion Result
// Outcome record returned for every document conversion attempt
// ============================================================================

use crate::document::ConversionError;
use chrono::{DateTime, Utc};
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text extracted by a converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    /// Markdown text of the document
    pub content: String,
    /// Document title, if the converter found one
    pub title: Option<String>,
}

impl ConvertedDocument {
    pub fn new(content: String, title: Option<String>) -> Self {
        Self { content, title }
    }
}

/// Result record of a conversion.
///
/// Exactly one of `content` and `error` is set, matching `success`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionResult {
    pub success: bool,
    pub file_path: String,
    pub content: Option<String>,
    pub title: Option<String>,
    pub error: Option<String>,
    pub converted_at: DateTime<Utc>,
}

impl ConversionResult {
    /// Successful conversion of `path`
    pub fn succeeded(path: &Path, document: ConvertedDocument) -> Self {
        Self {
            success: true,
            file_path: path.display().to_string(),
            content: Some(document.content),
            title: document.title,
            error: None,
            converted_at: Utc::now(),
        }
    }

    /// Failed conversion of `path`
    pub fn failed(path: &Path, error: &ConversionError) -> Self {
        Self {
            success: false,
            file_path: path.display().to_string(),
            content: None,
            title: None,
            error: Some(error.to_string()),
            converted_at: Utc::now(),
        }
    }

    /// Build from the outcome of a converter
    pub fn from_outcome(path: &Path, outcome: Result<ConvertedDocument, ConversionError>) -> Self {
        match outcome {
            Ok(document) => Self::succeeded(path, document),
            Err(error) => Self::failed(path, &error),
        }
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
