/*!
 * file-copier - Concatenate the text files of a project into one document
 *
 * This library walks a project directory, skips excluded folders and file
 * patterns, and joins the remaining text files into a single annotated
 * document suitable for pasting into other tools.
 */

pub mod aggregator;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod report;
pub mod settings;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use aggregator::{aggregate, Aggregator};
pub use config::{Config, OutputTarget};
pub use error::{CopierError, Result};
pub use report::{Reporter, RunReport};
pub use settings::{SettingsStore, WorkspaceSettings};
pub use types::{AggregationResult, FileRecord, SkipReason, SkippedFile, TraversalRequest};
pub use utils::{format_file_size, DEFAULT_EXCLUDED_FOLDERS, DEFAULT_EXCLUDED_PATTERNS, MAX_FILE_SIZE};
pub use writer::OutputWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
