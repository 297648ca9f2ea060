/*!
 * Configuration handling for file-copier
 */

use std::path::PathBuf;

use clap::Parser;

use crate::error::{CopierError, Result};
use crate::settings::WorkspaceSettings;
use crate::types::TraversalRequest;
use crate::utils::{
    clean_list, DEFAULT_EXCLUDED_FOLDERS, DEFAULT_EXCLUDED_PATTERNS, DEFAULT_OUTPUT_FILE,
};

/// Command-line arguments for file-copier
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "file-copier",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate the text files of a project into one annotated document",
    long_about = "Walks a project folder, skips excluded folders and file patterns, and joins the content of the remaining text files into a single document written to a file or copied to the clipboard."
)]
pub struct Args {
    /// Project directory to process
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Comma-separated folder names to exclude (remembered for this project)
    #[clap(long, value_delimiter = ',')]
    pub exclude_folders: Option<Vec<String>>,

    /// Comma-separated file patterns to exclude, e.g. "*.jpg,data.json" (remembered for this project)
    #[clap(long, value_delimiter = ',')]
    pub exclude_patterns: Option<Vec<String>>,

    /// Output file name, created inside the project directory
    #[clap(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Copy output to the system clipboard instead of writing a file
    #[clap(long, conflicts_with = "output")]
    pub clip: bool,

    /// Open the written file with the system viewer
    #[clap(long, conflicts_with = "clip")]
    pub open: bool,

    /// Do not remember exclusion lists given on the command line
    #[clap(long)]
    pub no_save: bool,

    /// Forget the exclusion lists remembered for this project
    #[clap(long)]
    pub reset_settings: bool,

    /// Location of the settings file
    #[clap(long, value_name = "PATH")]
    pub settings_file: Option<PathBuf>,

    /// List skipped files and the reason each was skipped
    #[clap(long)]
    pub show_skipped: bool,
}

/// Where the generated document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to this file
    File(PathBuf),
    /// Copy to the system clipboard
    Clipboard,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Project directory to process
    pub target_dir: PathBuf,

    /// Folder names to exclude
    pub excluded_folders: Vec<String>,

    /// File name patterns to exclude
    pub excluded_patterns: Vec<String>,

    /// Output file name as given by the user
    pub output_name: String,

    /// Destination of the document
    pub output: OutputTarget,

    /// Open the written file afterwards
    pub open_output: bool,

    /// Exclusion lists given on the command line
    pub overrides: WorkspaceSettings,

    /// Whether `overrides` should be remembered
    pub persist_overrides: bool,

    /// Print skipped files in the report
    pub show_skipped: bool,
}

impl Config {
    /// Create configuration from command-line arguments and stored settings
    ///
    /// Command-line lists win over stored ones, stored ones over the defaults.
    pub fn from_args(args: Args, stored: &WorkspaceSettings) -> Self {
        let target_dir = PathBuf::from(&args.directory_path);

        let overrides = WorkspaceSettings {
            excluded_folders: args.exclude_folders.map(clean_list),
            excluded_patterns: args.exclude_patterns.map(clean_list),
        };

        let excluded_folders = overrides
            .excluded_folders
            .clone()
            .or_else(|| stored.excluded_folders.clone())
            .unwrap_or_else(|| to_owned_list(&DEFAULT_EXCLUDED_FOLDERS));

        let excluded_patterns = overrides
            .excluded_patterns
            .clone()
            .or_else(|| stored.excluded_patterns.clone())
            .unwrap_or_else(|| to_owned_list(&DEFAULT_EXCLUDED_PATTERNS));

        let output_name = args.output.trim().to_string();
        let output = if args.clip {
            OutputTarget::Clipboard
        } else {
            OutputTarget::File(target_dir.join(&output_name))
        };

        Self {
            target_dir,
            excluded_folders,
            excluded_patterns,
            output_name,
            output,
            open_output: args.open,
            overrides,
            persist_overrides: !args.no_save,
            show_skipped: args.show_skipped,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            return Err(CopierError::RootNotFound(
                self.target_dir.display().to_string(),
            ));
        }

        crate::ensure!(
            self.target_dir.is_dir(),
            NotADirectory,
            "{}",
            self.target_dir.display()
        );

        if matches!(self.output, OutputTarget::File(_)) {
            crate::ensure!(
                !self.output_name.is_empty(),
                InvalidArgument,
                "Filename cannot be empty"
            );
        }

        Ok(())
    }

    /// Traversal inputs for this configuration
    pub fn traversal_request(&self) -> TraversalRequest {
        TraversalRequest::new(&self.target_dir)
            .with_excluded_folders(self.excluded_folders.iter().cloned())
            .with_excluded_patterns(self.excluded_patterns.iter().cloned())
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
