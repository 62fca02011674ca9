/*!
 * Command-line interface for combinefs
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use indicatif::{ProgressBar, ProgressStyle};

use combinefs::aggregator::Aggregator;
use combinefs::config::{Args, Config};
use combinefs::error::Result;
use combinefs::report::{AggregateReport, ReportFormat, Reporter};
use combinefs::utils::count_files;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("Setup");
    progress.set_message(format!(
        "Scanning directory: {}",
        config.target_dir.display()
    ));

    // Count files for progress tracking
    match count_files(&config.target_dir, &config.output_file) {
        Ok(count) => {
            progress.set_message(format!("Found {} files to combine", count));
            progress.set_length(count);
        }
        Err(e) => {
            progress.set_message(format!("Warning: Failed to count files: {}", e));
        }
    }

    progress.set_prefix("Combining");
    progress.set_message("Starting aggregation...");

    // Run the aggregation
    let aggregator = Aggregator::new(config.clone(), Arc::new(progress.clone()));
    let start_time = Instant::now();
    let stats = aggregator.run()?;
    let duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare and print the run report. Per-file skips were already reported
    // to stderr during the run and do not affect the exit code.
    let report = AggregateReport {
        output_file: config.output_file.display().to_string(),
        duration,
        files_combined: stats.files_combined,
        total_bytes: stats.total_bytes,
        skipped: stats.skipped,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&report);

    Ok(())
}
