/*!
 * Core types for the combinefs application
 */

use std::io;
use std::path::PathBuf;

/// A regular file discovered during traversal
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Absolute path on disk
    pub abs_path: PathBuf,
    /// Path relative to the traversal root, used as the section label
    pub rel_path: PathBuf,
}

/// The outcome of reading one file as text
///
/// Per-file failure is data, not an error: an unreadable file is skipped and
/// reported while the run continues.
#[derive(Debug)]
pub enum FileContent {
    /// The file decoded cleanly as UTF-8
    Text(String),
    /// The file could not be opened or is not valid UTF-8
    Unreadable(io::Error),
}
