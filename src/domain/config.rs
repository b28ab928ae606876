// ============================================================================
// Document Conversion Configuration
// Limits and options applied before a converter runs
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default upper bound on input size (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Configuration for a [`DocumentProcessor`](crate::document::DocumentProcessor)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocumentConfig {
    /// Maximum input size in bytes
    /// None means no size limit
    pub max_file_size: Option<u64>,

    /// Whether to report the document title alongside the content
    pub extract_title: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
            extract_title: true,
        }
    }
}

impl DocumentConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set maximum input size in bytes
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = Some(bytes);
        self
    }

    /// Builder method: Remove the size limit
    pub fn without_size_limit(mut self) -> Self {
        self.max_file_size = None;
        self
    }

    /// Builder method: Enable or disable title extraction
    pub fn with_extract_title(mut self, extract: bool) -> Self {
        self.extract_title = extract;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_size == Some(0) {
            return Err("Maximum file size must be positive".to_string());
        }
        Ok(())
    }
}
