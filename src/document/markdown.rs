// ============================================================================
// Markdown Converter
// Passes plain text and markdown through, picking up the first H1 as title
// ============================================================================

use super::errors::{ConversionError, DocumentResult};
use crate::domain::ConvertedDocument;
use crate::interfaces::DocumentConverter;
use std::fs;
use std::path::Path;

/// Converter for `.md`, `.markdown` and `.txt` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for MarkdownConverter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown", "txt"]
    }

    fn convert(&self, path: &Path) -> DocumentResult<ConvertedDocument> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|_| ConversionError::InvalidUtf8)?;
        let content = content.strip_prefix('\u{feff}').map(str::to_owned).unwrap_or(content);
        let title = first_heading(&content);
        Ok(ConvertedDocument::new(content, title))
    }
}

/// Text of the first ATX level-1 heading (`# Title`), if any.
///
/// Lines inside fenced code blocks are skipped. A fence closes only on the
/// marker character that opened it.
pub fn first_heading(text: &str) -> Option<String> {
    let mut open_fence: Option<char> = None;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if let Some(marker) = fence_marker(trimmed) {
            match open_fence {
                None => open_fence = Some(marker),
                Some(open) if open == marker => open_fence = None,
                Some(_) => {},
            }
            continue;
        }
        if open_fence.is_some() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("# ") {
            let title = strip_closing_hashes(rest.trim());
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }
    None
}

/// Fence character for a line opening or closing a code block.
fn fence_marker(line: &str) -> Option<char> {
    if line.starts_with("```") {
        Some('`')
    } else if line.starts_with("~~~") {
        Some('~')
    } else {
        None
    }
}

/// Drop an optional closing `#` sequence. It only counts when it stands
/// alone or follows whitespace, so `C#` keeps its hash.
fn strip_closing_hashes(title: &str) -> &str {
    let without = title.trim_end_matches('#');
    if without.is_empty() || without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        title
    }
}
