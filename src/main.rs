/*!
 * Command-line interface for file-copier
 */

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use file_copier::aggregator::Aggregator;
use file_copier::config::{Args, Config, OutputTarget};
use file_copier::error::Result;
use file_copier::report::{Reporter, RunReport};
use file_copier::settings::{SettingsStore, WorkspaceSettings};
use file_copier::writer::OutputWriter;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let store = match &args.settings_file {
        Some(path) => SettingsStore::at(path),
        None => SettingsStore::default_location(),
    };
    let root = PathBuf::from(&args.directory_path);

    if args.reset_settings {
        store.clear(&root)?;
    }

    let stored = store.load(&root).unwrap_or_else(|e| {
        log::warn!("Ignoring stored settings: {}", e);
        WorkspaceSettings::default()
    });

    let config = Config::from_args(args, &stored);
    config.validate()?;

    if config.persist_overrides && !config.overrides.is_empty() {
        if let Err(e) = store.save(&config.target_dir, config.overrides.clone()) {
            log::warn!(
                "Could not save settings to {}: {}",
                store.path().display(),
                e
            );
        }
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_prefix("Copying");
    progress.enable_steady_tick(Duration::from_millis(100));

    let start_time = Instant::now();

    let aggregator = Aggregator::new(config.traversal_request(), Arc::new(progress.clone()));
    let result = aggregator.run();
    progress.finish_and_clear();
    let result = result?;

    let writer = OutputWriter::new(config.output.clone());
    let destination = writer.write(&result)?;

    let duration = start_time.elapsed();

    if config.open_output {
        if let OutputTarget::File(path) = &config.output {
            if let Err(e) = open::that(path) {
                log::warn!("Could not open {}: {}", path.display(), e);
            }
        }
    }

    let report = RunReport {
        destination,
        duration,
        files_processed: result.processed_count,
        output_bytes: result.summary_header.len() + result.body.len(),
        skipped: result.skipped,
    };
    Reporter::new(config.show_skipped).print_report(&report);

    Ok(())
}
