// ============================================================================
// Document Processor
// Validates input files and dispatches them to the matching converter
// ============================================================================

use super::errors::{ConversionError, DocumentResult};
use super::markdown::MarkdownConverter;
use super::pdf::PdfConverter;
use crate::domain::{ConversionResult, ConvertedDocument, DocumentConfig};
use crate::interfaces::{extension_of, DocumentConverter};
use std::fmt;
use std::fs;
use std::path::Path;

/// Converts files to markdown using an ordered list of converters.
///
/// The first converter whose `supports` accepts the path wins. Converters
/// added with [`with_converter`](Self::with_converter) take precedence over
/// the built-in ones.
///
/// # Example
/// ```no_run
/// use rnw_calc::document::DocumentProcessor;
/// use rnw_calc::domain::DocumentConfig;
///
/// let processor = DocumentProcessor::new(DocumentConfig::default()).unwrap();
/// let result = processor.convert("README.md");
/// if result.success {
///     println!("{}", result.content.unwrap_or_default());
/// }
/// ```
pub struct DocumentProcessor {
    config: DocumentConfig,
    converters: Vec<Box<dyn DocumentConverter>>,
}

impl DocumentProcessor {
    /// Create a processor with the built-in converters
    ///
    /// # Errors
    /// Returns the validation message if `config` is invalid.
    pub fn new(config: DocumentConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            converters: builtin_converters(),
        })
    }

    /// Register an additional converter ahead of the existing ones
    pub fn with_converter(mut self, converter: Box<dyn DocumentConverter>) -> Self {
        self.converters.insert(0, converter);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Names of the registered converters, in dispatch order
    pub fn converter_names(&self) -> Vec<&str> {
        self.converters.iter().map(|c| c.name()).collect()
    }

    /// Convert the file at `path`.
    ///
    /// Never fails: problems are reported through
    /// `ConversionResult::error` with `success == false`.
    pub fn convert(&self, path: impl AsRef<Path>) -> ConversionResult {
        let path = path.as_ref();
        let outcome = self.try_convert(path);

        match &outcome {
            Ok(document) => tracing::debug!(
                path = %path.display(),
                bytes = document.content.len(),
                title = ?document.title,
                "Document converted"
            ),
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "Document conversion failed"),
        }

        ConversionResult::from_outcome(path, outcome)
    }

    /// Convert the file at `path`, returning the typed error on failure.
    pub fn try_convert(&self, path: &Path) -> DocumentResult<ConvertedDocument> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(ConversionError::NotAFile);
        }

        if let Some(limit) = self.config.max_file_size {
            if metadata.len() > limit {
                return Err(ConversionError::TooLarge {
                    size: metadata.len(),
                    limit,
                });
            }
        }

        let converter = self
            .converters
            .iter()
            .find(|c| c.supports(path))
            .ok_or_else(|| ConversionError::Unsupported(extension_of(path)))?;

        tracing::trace!(converter = converter.name(), path = %path.display(), "Dispatching document");

        let mut document = converter.convert(path)?;
        if !self.config.extract_title {
            document.title = None;
        }
        Ok(document)
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self {
            config: DocumentConfig::default(),
            converters: builtin_converters(),
        }
    }
}

impl fmt::Debug for DocumentProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentProcessor")
            .field("config", &self.config)
            .field("converters", &self.converter_names())
            .finish()
    }
}

/// Converters every processor starts with, in dispatch order.
fn builtin_converters() -> Vec<Box<dyn DocumentConverter>> {
    vec![Box::new(MarkdownConverter::new()), Box::new(PdfConverter::new())]
}

/// Convert a document to markdown with the default processor.
///
/// # Example
/// ```no_run
/// use rnw_calc::document::convert_document_to_markdown;
///
/// let result = convert_document_to_markdown("document.md");
/// println!("{:?}", result.content);
/// ```
pub fn convert_document_to_markdown(path: impl AsRef<Path>) -> ConversionResult {
    DocumentProcessor::default().convert(path)
}
