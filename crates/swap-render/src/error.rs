//! Error types for report rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced when a report is finalized.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The canvas recorded a layout fault in an earlier call.
    #[error("report canvas fault: {message}")]
    Fault { message: String },

    /// The finished document could not be persisted.
    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
