//! Global error handling for combinefs
//!
//! Only fatal conditions become a `CombineError`: a configuration that cannot
//! be validated or an output file that cannot be created. Per-file read
//! failures are modeled separately as [`crate::types::FileContent`] and never
//! abort a run.

use std::io;
use thiserror::Error;

/// Global error type for combinefs operations
#[derive(Error, Debug)]
pub enum CombineError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure to create or write the aggregate output file
    #[error("Output error: {0}")]
    Output(String),
}

/// Specialized Result type for combinefs operations
pub type Result<T> = std::result::Result<T, CombineError>;

// Allow converting CombineError to io::Error for backward compatibility with tests
impl From<CombineError> for io::Error {
    fn from(err: CombineError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}

/// Creates a CombineError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::CombineError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
