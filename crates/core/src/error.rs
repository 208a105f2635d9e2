use std::path::PathBuf;

use thiserror::Error;

/// Result type for correlation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a correlation run.
#[derive(Debug, Error)]
pub enum Error {
    /// Input report missing, unreadable, or not well-formed
    #[error("invalid input data in {}: {message}", .path.display())]
    DataFormat {
        /// Path of the offending input file
        path: PathBuf,
        /// What went wrong reading or parsing it
        message: String,
    },

    /// Coverage report lacks per-line test contexts
    #[error("{0}")]
    CoverageFormat(String),

    /// Exclusion pattern failed to compile
    #[error("invalid exclusion pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O failure outside of report parsing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a data format error tied to an input file
    #[must_use]
    pub fn data_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DataFormat {
            path: path.into(),
            message: message.into(),
        }
    }
}
