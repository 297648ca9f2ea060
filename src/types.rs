/*!
 * Core types and data structures for file-copier
 */

use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::{format_file_size, DEFAULT_EXCLUDED_FOLDERS, DEFAULT_EXCLUDED_PATTERNS};

/// Inputs of a single aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRequest {
    /// Directory to aggregate
    pub root: PathBuf,
    /// Directory base names whose whole subtree is skipped (case-sensitive)
    pub excluded_folders: Vec<String>,
    /// Glob patterns matched case-insensitively against file base names
    pub excluded_patterns: Vec<String>,
}

impl TraversalRequest {
    /// Create a request for `root` using the built-in exclusion lists
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_folders: DEFAULT_EXCLUDED_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_patterns: DEFAULT_EXCLUDED_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the excluded folder names
    pub fn with_excluded_folders<I, S>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_folders = folders.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the excluded file patterns
    pub fn with_excluded_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
}

/// A file whose content made it into the output
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the aggregation root
    pub relative_path: PathBuf,
    /// Text content of the file
    pub content: String,
}

/// Why a file was left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Base name matched an exclusion pattern
    Excluded {
        /// The pattern that matched
        pattern: String,
    },
    /// File is larger than the size limit
    Oversized {
        /// File size in bytes
        size: u64,
    },
    /// File could not be read as text
    Unreadable {
        /// Error message from the failed read
        reason: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excluded { pattern } => write!(f, "matches pattern {}", pattern),
            Self::Oversized { size } => write!(f, "too large ({})", format_file_size(*size)),
            Self::Unreadable { reason } => write!(f, "unreadable: {}", reason),
        }
    }
}

/// A file that was visited but not included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path relative to the aggregation root
    pub relative_path: PathBuf,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Output of an aggregation run
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// Summary block placed at the top of the document
    pub summary_header: String,
    /// Concatenated file blocks
    pub body: String,
    /// Number of file blocks in `body`
    pub processed_count: usize,
    /// Files that were visited but left out
    pub skipped: Vec<SkippedFile>,
}

impl AggregationResult {
    /// The complete document: header followed by body
    pub fn document(&self) -> String {
        let mut doc = String::with_capacity(self.summary_header.len() + self.body.len());
        doc.push_str(&self.summary_header);
        doc.push_str(&self.body);
        doc
    }

    /// Whether `relative_path` was skipped, and why
    pub fn skip_reason(&self, relative_path: impl AsRef<Path>) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.relative_path == relative_path.as_ref())
            .map(|s| &s.reason)
    }
}
