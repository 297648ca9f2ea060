/*!
 * Utility functions and defaults for file-copier
 */

use once_cell::sync::Lazy;

/// Files larger than this many bytes are never included
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Output file name used when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "project-files-content.txt";

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Normalize a list of user-supplied names: trim each and drop empties
pub fn clean_list<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Directory names skipped by default
pub static DEFAULT_EXCLUDED_FOLDERS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["node_modules", ".git", ".vscode", ".next"]);

/// File name patterns skipped by default
pub static DEFAULT_EXCLUDED_PATTERNS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Executables
        "*.exe",
        "*.dll",
        // Images
        "*.jpg",
        "*.png",
        "*.pdf",
        "*.jpeg",
        "*.avif",
        "*.webp",
        // Audio & Video
        "*.mp3",
        "*.wav",
        "*.mp4",
        // Documents
        "*.docx",
        "*.ico",
        "*.vsix",
        // Secrets & tooling
        "*.gitignore",
        "*.env",
        "*.json",
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(MAX_FILE_SIZE), "1.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_clean_list() {
        let cleaned = clean_list([" node_modules ", "", "dist", "   "]);
        assert_eq!(cleaned, vec!["node_modules", "dist"]);
    }

    #[test]
    fn test_defaults_have_no_duplicates() {
        let mut folders = DEFAULT_EXCLUDED_FOLDERS.clone();
        folders.sort();
        folders.dedup();
        assert_eq!(folders.len(), DEFAULT_EXCLUDED_FOLDERS.len());

        let mut patterns = DEFAULT_EXCLUDED_PATTERNS.clone();
        patterns.sort();
        patterns.dedup();
        assert_eq!(patterns.len(), DEFAULT_EXCLUDED_PATTERNS.len());
    }
}
