/*!
 * combinefs - Concatenate every readable text file under a directory into
 * one annotated dump
 *
 * This library walks a directory tree and appends the contents of every file
 * that decodes as UTF-8 to a single output file, each section labeled with
 * the file's path relative to the root.
 */

pub mod aggregator;
pub mod config;
pub mod error;
pub mod report;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use aggregator::{AggregateStatistics, Aggregator, SkippedFile};
pub use config::{Config, DEFAULT_OUTPUT_FILE};
pub use error::{CombineError, Result};
pub use report::{AggregateReport, ReportFormat, Reporter};
pub use types::{FileContent, FileEntry};
pub use utils::{count_files, format_file_size};
pub use writer::TextWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
