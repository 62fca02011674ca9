/*!
 * Directory traversal and sequential aggregation loop
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::types::{FileContent, FileEntry};
use crate::writer::TextWriter;

/// A file that was skipped during aggregation, with the reason
#[derive(Debug, Clone)]
pub struct SkippedFile {
    /// Path relative to the traversal root
    pub path: String,
    /// Human-readable failure description
    pub reason: String,
}

/// Statistics accumulated over one aggregation run
#[derive(Debug, Clone, Default)]
pub struct AggregateStatistics {
    /// Number of files whose contents were written to the output
    pub files_combined: usize,
    /// Number of content bytes written (delimiters excluded)
    pub total_bytes: u64,
    /// Files that could not be read as UTF-8 text
    pub skipped: Vec<SkippedFile>,
}

impl AggregateStatistics {
    /// Number of files skipped as unreadable
    pub fn files_skipped(&self) -> usize {
        self.skipped.len()
    }
}

/// Aggregator for directory contents
///
/// Walks the target directory in lexicographic order and appends every file
/// that decodes as UTF-8 to the output file, one labeled section per file.
/// The run is fully sequential; one file is read and written at a time.
pub struct Aggregator {
    /// Aggregator configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Aggregator {
    /// Create a new aggregator
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Walk the target directory and write the aggregate output file
    ///
    /// Per-file failures are reported to stderr and recorded in the returned
    /// statistics; only configuration problems and output-file failures abort
    /// the run.
    pub fn run(&self) -> Result<AggregateStatistics> {
        let root = fs::canonicalize(&self.config.target_dir)?;

        // Created before the walk so a stale aggregate is truncated up front
        // and so the exclusion check below can compare real paths.
        let mut writer = TextWriter::create(&self.config.output_file)?;
        let output_path = fs::canonicalize(&self.config.output_file)?;

        let mut stats = AggregateStatistics::default();

        for result in WalkDir::new(&root).sort_by_file_name() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| display_path(p, &root))
                        .unwrap_or_else(|| "<unknown>".to_string());
                    eprintln!("Could not read {}: {}", path, e);
                    stats.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.path() == output_path {
                continue;
            }

            let file_entry = FileEntry {
                rel_path: entry
                    .path()
                    .strip_prefix(&root)
                    .unwrap_or(entry.path())
                    .to_path_buf(),
                abs_path: entry.into_path(),
            };

            self.progress.inc(1);
            self.progress.set_message(format!(
                "Current file: {}",
                file_entry.rel_path.display()
            ));

            match self.read_file(&file_entry.abs_path) {
                FileContent::Text(content) => {
                    writer.write_section(&file_entry.rel_path, &content)?;
                    stats.files_combined += 1;
                    stats.total_bytes += content.len() as u64;
                }
                FileContent::Unreadable(e) => {
                    let path = file_entry.rel_path.display().to_string();
                    eprintln!("Could not read {}: {}", path, e);
                    stats.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        writer.finish()?;

        Ok(stats)
    }

    /// Read one file as UTF-8 text
    ///
    /// Open errors and decode errors both surface as
    /// [`FileContent::Unreadable`]; neither aborts the run.
    pub fn read_file(&self, path: &Path) -> FileContent {
        match fs::read_to_string(path) {
            Ok(content) => FileContent::Text(content),
            Err(e) => FileContent::Unreadable(e),
        }
    }
}

/// Render a path relative to the root when possible
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
