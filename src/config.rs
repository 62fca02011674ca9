/*!
 * Configuration handling for combinefs
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;

/// Default name of the aggregate output file, created inside the target
/// directory.
pub const DEFAULT_OUTPUT_FILE: &str = "all_files_combined.txt";

/// Command-line arguments for combinefs
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "combinefs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate every readable text file under a directory into one annotated dump",
    long_about = "Walks a directory tree and appends the contents of every file it can read \
                  as UTF-8 to a single output file, each section labeled with the file's \
                  path relative to the root. Unreadable files are skipped and reported."
)]
pub struct Args {
    /// Target directory to aggregate
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output file name (resolved inside the target directory when bare)
    #[clap(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to aggregate
    pub target_dir: PathBuf,

    /// Output file path
    pub output_file: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// A bare output file name lands inside the target directory; a name with
    /// path components (or an absolute path) is used as given.
    pub fn from_args(args: Args) -> Self {
        let target_dir = PathBuf::from(args.directory_path);
        let output_path = PathBuf::from(args.output_file);

        let output_file = if !output_path.is_absolute()
            && output_path
                .parent()
                .map_or(true, |p| p == Path::new(""))
        {
            target_dir.join(output_path)
        } else {
            output_path
        };

        Self {
            target_dir,
            output_file,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.exists() && self.target_dir.is_dir(),
            Config,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        // The output file itself is created later; only its parent must exist
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == Path::new("") || parent.exists(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}
