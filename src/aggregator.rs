/*!
 * Directory traversal and document assembly
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use glob_match::glob_match;
use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::error::{CopierError, Result};
use crate::types::{AggregationResult, FileRecord, SkipReason, SkippedFile, TraversalRequest};
use crate::utils::MAX_FILE_SIZE;
use crate::writer::{format_file_block, format_summary_header, timestamp};

/// Aggregate the tree described by `request` without progress reporting
pub fn aggregate(request: &TraversalRequest) -> Result<AggregationResult> {
    Aggregator::new(request.clone(), Arc::new(ProgressBar::hidden())).run()
}

/// Walks a directory tree and concatenates its text files
pub struct Aggregator {
    /// Run inputs
    request: TraversalRequest,
    /// Lowercased copies of the exclusion patterns, paired with the originals
    patterns: Vec<(String, String)>,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Aggregator {
    /// Create a new aggregator
    pub fn new(request: TraversalRequest, progress: Arc<ProgressBar>) -> Self {
        let patterns = request
            .excluded_patterns
            .iter()
            .map(|p| (p.to_lowercase(), p.clone()))
            .collect();

        Self {
            request,
            patterns,
            progress,
        }
    }

    /// Run the traversal and build the document
    pub fn run(&self) -> Result<AggregationResult> {
        let root = &self.request.root;
        self.check_root(root)?;

        log::info!("Aggregating {}", root.display());

        let mut body = String::new();
        let mut processed_count = 0;
        let mut skipped = Vec::new();

        // Pre-order walk with sorted siblings. walkdir keeps its own stack of
        // open directories, so deep trees do not recurse on the call stack.
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_excluded_dir(e));

        for entry in walker {
            let entry = entry.map_err(CopierError::from)?;

            if entry.depth() == 0 {
                continue;
            }

            if entry.file_type().is_dir() {
                log::trace!("Entering {}", entry.path().display());
                continue;
            }

            match self.process_file(&entry) {
                Ok(record) => {
                    body.push_str(&format_file_block(&record.relative_path, &record.content));
                    processed_count += 1;
                }
                Err(skip) => {
                    log::debug!(
                        "Skipping {}: {}",
                        skip.relative_path.display(),
                        skip.reason
                    );
                    skipped.push(skip);
                }
            }
        }

        let summary_header = format_summary_header(
            &timestamp(),
            processed_count,
            &self.request.excluded_folders,
            &self.request.excluded_patterns,
        );

        log::info!(
            "Aggregated {} files ({} skipped)",
            processed_count,
            skipped.len()
        );

        Ok(AggregationResult {
            summary_header,
            body,
            processed_count,
            skipped,
        })
    }

    /// Check that the root exists and is a directory
    fn check_root(&self, root: &Path) -> Result<()> {
        let metadata = fs::metadata(root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                CopierError::RootNotFound(root.display().to_string())
            }
            _ => CopierError::Io(e),
        })?;

        crate::ensure!(
            metadata.is_dir(),
            NotADirectory,
            "{}",
            root.display()
        );

        Ok(())
    }

    /// Check if a directory entry is on the folder exclusion list
    pub fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        self.request
            .excluded_folders
            .iter()
            .any(|folder| folder.as_str() == name)
    }

    /// Return the first exclusion pattern matching `file_name`, ignoring case
    pub fn matching_pattern(&self, file_name: &str) -> Option<&str> {
        let lowered = file_name.to_lowercase();

        self.patterns
            .iter()
            .find(|(glob, _)| glob_match(glob, &lowered))
            .map(|(_, original)| original.as_str())
    }

    /// Decide whether a file is included and read it if so
    fn process_file(&self, entry: &DirEntry) -> std::result::Result<FileRecord, SkippedFile> {
        let relative_path = entry
            .path()
            .strip_prefix(&self.request.root)
            .unwrap_or(entry.path())
            .to_path_buf();

        self.progress.inc(1);
        self.progress
            .set_message(format!("Current file: {}", relative_path.display()));

        let skip = |reason| SkippedFile {
            relative_path: relative_path.clone(),
            reason,
        };

        let file_name = entry.file_name().to_string_lossy();
        if let Some(pattern) = self.matching_pattern(&file_name) {
            return Err(skip(SkipReason::Excluded {
                pattern: pattern.to_string(),
            }));
        }

        // Follows symlinks so a link to a regular file is read like one
        let metadata = fs::metadata(entry.path()).map_err(|e| {
            skip(SkipReason::Unreadable {
                reason: e.to_string(),
            })
        })?;

        if metadata.len() > MAX_FILE_SIZE {
            return Err(skip(SkipReason::Oversized {
                size: metadata.len(),
            }));
        }

        let content = fs::read_to_string(entry.path()).map_err(|e| {
            skip(SkipReason::Unreadable {
                reason: e.to_string(),
            })
        })?;

        Ok(FileRecord {
            relative_path,
            content,
        })
    }
}
