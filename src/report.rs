/*!
 * End-of-run console report
 *
 * Renders what a run produced as `tabled` tables.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::SkippedFile;
use crate::utils::format_file_size;

/// Statistics for a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Where the document went
    pub destination: String,
    /// Time taken to aggregate and deliver
    pub duration: Duration,
    /// Number of files included
    pub files_processed: usize,
    /// Files visited but left out
    pub skipped: Vec<SkippedFile>,
    /// Size of the delivered document in bytes
    pub output_bytes: usize,
}

/// Report generator for run results
pub struct Reporter {
    show_skipped: bool,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(show_skipped: bool) -> Self {
        Self { show_skipped }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    /// Generate the report text
    pub fn generate_report(&self, report: &RunReport) -> String {
        let summary = format!("Files copied\n{}", self.create_summary_table(report));

        if self.show_skipped && !report.skipped.is_empty() {
            format!(
                "Skipped files\n{}\n\n{}",
                self.create_skipped_table(report),
                summary
            )
        } else {
            summary
        }
    }

    fn create_summary_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "Destination",
                value: report.destination.clone(),
            },
            SummaryRow {
                key: "Files processed",
                value: report.files_processed.to_string(),
            },
            SummaryRow {
                key: "Files skipped",
                value: report.skipped.len().to_string(),
            },
            SummaryRow {
                key: "Output size",
                value: format_file_size(report.output_bytes as u64),
            },
            SummaryRow {
                key: "Process time",
                value: format!("{:.4?}", report.duration),
            },
        ];

        styled(Table::new(rows))
    }

    fn create_skipped_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SkippedRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<SkippedRow> = report
            .skipped
            .iter()
            .map(|s| SkippedRow {
                path: s.relative_path.display().to_string(),
                reason: s.reason.to_string(),
            })
            .collect();

        styled(Table::new(rows))
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));

    table.to_string()
}
