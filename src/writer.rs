/*!
 * Plain-text writer for the aggregate output file
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CombineError, Result};

/// Width of the `=` and `-` delimiter lines around each section
const DELIMITER_WIDTH: usize = 80;

/// Writer that owns the aggregate output file for the duration of a run
///
/// The file is created (truncating any stale aggregate from a previous run)
/// when the writer is constructed and closed when it is dropped, so every
/// exit path releases the handle.
pub struct TextWriter {
    out: BufWriter<File>,
}

impl TextWriter {
    /// Create the output file, truncating it if it already exists
    ///
    /// Failure here is fatal for the run: without the output file there is
    /// nothing meaningful left to do.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| {
            CombineError::Output(format!("cannot create {}: {}", path.display(), e))
        })?;

        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Append one labeled section for a file's decoded contents
    ///
    /// Layout, using `\n` line endings throughout:
    ///
    /// ```text
    /// ================================================================================
    /// FILE: <relative path>
    /// --------------------------------------------------------------------------------
    /// <contents>
    /// ================================================================================
    /// <blank line>
    /// ```
    pub fn write_section(&mut self, rel_path: &Path, content: &str) -> Result<()> {
        let equals = "=".repeat(DELIMITER_WIDTH);
        let dashes = "-".repeat(DELIMITER_WIDTH);

        write!(
            self.out,
            "{}\nFILE: {}\n{}\n{}\n{}\n\n",
            equals,
            rel_path.display(),
            dashes,
            content,
            equals
        )?;

        Ok(())
    }

    /// Flush buffered sections to disk
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
