/*!
 * Text layout and output delivery for file-copier
 */

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::clipboard::copy_to_clipboard;
use crate::config::OutputTarget;
use crate::error::{CopierError, Result};
use crate::types::AggregationResult;

/// Line framing each file header
pub const SEPARATOR: &str = "========================================";

/// Title of the summary block
const SUMMARY_TITLE: &str = "Project Files Summary";

/// Underline of the summary title
const SUMMARY_UNDERLINE: &str = "===================";

/// Current local time in the layout used by the summary header
pub fn timestamp() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Format the block for a single included file
pub fn format_file_block(relative_path: &Path, content: &str) -> String {
    format!(
        "\n\n{sep}\nFile: {path}\n{sep}\n\n{content}\n\n",
        sep = SEPARATOR,
        path = relative_path.display(),
        content = content,
    )
}

/// Format the summary block placed before all file blocks
pub fn format_summary_header(
    timestamp: &str,
    processed_count: usize,
    excluded_folders: &[String],
    excluded_patterns: &[String],
) -> String {
    format!(
        "{}\n{}\nGenerated on: {}\nFiles processed: {}\nExcluded folders: {}\nExcluded patterns: {}\n\n",
        SUMMARY_TITLE,
        SUMMARY_UNDERLINE,
        timestamp,
        processed_count,
        excluded_folders.join(", "),
        excluded_patterns.join(", "),
    )
}

/// Delivers an aggregated document to its destination
pub struct OutputWriter {
    /// Where the document goes
    target: OutputTarget,
}

impl OutputWriter {
    /// Create a new writer for `target`
    pub fn new(target: OutputTarget) -> Self {
        Self { target }
    }

    /// Write the document and describe where it went
    pub fn write(&self, result: &AggregationResult) -> Result<String> {
        let document = result.document();

        match &self.target {
            OutputTarget::File(path) => {
                fs::write(path, document).map_err(|e| {
                    CopierError::Io(std::io::Error::new(
                        e.kind(),
                        format!("failed to write {}: {}", path.display(), e),
                    ))
                })?;
                log::info!("Wrote {}", path.display());
                Ok(path.display().to_string())
            }
            OutputTarget::Clipboard => {
                copy_to_clipboard(&document)?;
                log::info!("Copied {} bytes to clipboard", document.len());
                Ok("clipboard".to_string())
            }
        }
    }
}
