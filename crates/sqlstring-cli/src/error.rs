//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors that can occur while loading a statement document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that was being read (`-` for stdin).
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid statement JSON.
    #[error("invalid statement document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document holds no statements.
    #[error("statement document is empty")]
    EmptyDocument,
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;
