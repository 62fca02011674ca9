/*!
 * Utility functions for combinefs
 */

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Count the regular files a run will visit, for progress tracking
///
/// The output file is excluded the same way the aggregation loop excludes it.
/// Unreadable directories are ignored here; the run itself reports them.
pub fn count_files(dir: &Path, output_file: &Path) -> io::Result<u64> {
    let root = fs::canonicalize(dir)?;
    let output_path = fs::canonicalize(output_file).ok();
    let mut count = 0;

    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_file() && Some(entry.path()) != output_path.as_deref() {
            count += 1;
        }
    }

    Ok(count)
}

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
