/*!
 * Reporting functionality for combinefs
 *
 * Renders a post-run summary of the aggregation using the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::aggregator::SkippedFile;
use crate::utils::format_file_size;

/// Summary of one aggregation run
#[derive(Debug, Clone)]
pub struct AggregateReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to walk and write
    pub duration: Duration,
    /// Number of files written to the output
    pub files_combined: usize,
    /// Content bytes written
    pub total_bytes: u64,
    /// Files skipped as unreadable
    pub skipped: Vec<SkippedFile>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for aggregation results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &AggregateReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &AggregateReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create the run summary table
    fn create_summary_table(&self, report: &AggregateReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "Files Combined".to_string(),
                value: report.files_combined.to_string(),
            },
            SummaryRow {
                key: "Files Skipped".to_string(),
                value: report.skipped.len().to_string(),
            },
            SummaryRow {
                key: "Content Written".to_string(),
                value: format_file_size(report.total_bytes),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create the skipped files table
    fn create_skipped_table(&self, report: &AggregateReport) -> String {
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
            .map(|skip| SkippedRow {
                path: skip.path.clone(),
                reason: skip.reason.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &AggregateReport) -> String {
        let summary_title = "AGGREGATION COMPLETE";
        let summary_table = self.create_summary_table(report);

        if report.skipped.is_empty() {
            format!("{}\n{}", summary_title, summary_table)
        } else {
            format!(
                "SKIPPED FILES\n{}\n\n{}\n{}",
                self.create_skipped_table(report),
                summary_title,
                summary_table
            )
        }
    }
}
