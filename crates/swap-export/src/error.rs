//! Error types for swap export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while mapping swaps or moving rows through CSV files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A numeric wire field did not parse.
    #[error("non-numeric {field} value '{value}'")]
    Parse {
        /// Wire name of the offending field.
        field: &'static str,
        value: String,
    },

    /// File create, open, read or write failure.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be parsed (ragged row, broken quoting).
    #[error("malformed CSV in {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
