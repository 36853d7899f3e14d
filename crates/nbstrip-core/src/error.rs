//! Error types for notebook cleaning operations.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for notebook cleaning operations.
///
/// Every failure is fatal to the run: the pipeline never skips a malformed
/// cell or leaves a partially cleaned notebook behind.
#[derive(Error, Debug)]
pub enum CleanError {
    /// Input file does not exist or cannot be read
    #[error("cannot read notebook {path}: {source}")]
    NotFound {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input content is not well-formed notebook JSON
    #[error("invalid notebook JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A cell is missing a field the cleaner needs
    #[error("cell {index}: missing required field `{field}`")]
    Schema {
        /// Zero-based index of the offending cell
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// Destination file cannot be created or written
    #[error("cannot write notebook {path}: {source}")]
    Write {
        /// Path that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for notebook cleaning operations
pub type Result<T> = std::result::Result<T, CleanError>;
