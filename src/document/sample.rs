// ============================================================================
// Sample Document
// Small markdown file used by the demo and tests
// ============================================================================

use super::errors::DocumentResult;
use crate::domain::Operation;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used by [`write_sample_document`]
pub const SAMPLE_FILE_NAME: &str = "rnw_sample.md";

/// Title of the sample document
pub const SAMPLE_TITLE: &str = "Sample Document";

/// Operands shown for each operation in the sample
const SAMPLE_OPERANDS: [(i64, i64); 5] = [(2, 3), (10, 4), (3, 4), (15, 3), (2, 8)];

/// Markdown body of the sample document.
pub fn sample_markdown() -> String {
    let mut text = format!(
        "# {}\n\n\
         This is a sample document created for demonstration purposes.\n\n\
         ## Features\n\n\
         - Document conversion\n\
         - Markdown output\n\
         - Error handling\n\n\
         ## Calculator Integration\n\n",
        SAMPLE_TITLE
    );

    for (op, (a, b)) in Operation::ALL.iter().zip(SAMPLE_OPERANDS) {
        // Sample operands never divide by zero
        if let Ok(result) = op.apply(a, b) {
            text.push_str(&format!(
                "- {}: {} {} {} = {}\n",
                capitalize(op.name()),
                a,
                op.symbol(),
                b,
                result
            ));
        }
    }

    text.push_str(
        "\n## Conclusion\n\n\
         Documents in plain text or markdown convert directly, \
         making them easy to process and analyze.\n",
    );
    text
}

/// Write the sample document into `dir`, returning its path.
pub fn write_sample_document(dir: impl AsRef<Path>) -> DocumentResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(SAMPLE_FILE_NAME);
    fs::write(&path, sample_markdown())?;
    tracing::debug!(path = %path.display(), "Sample document written");
    Ok(path)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
