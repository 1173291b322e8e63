//! Error types for sparsemat

use std::path::PathBuf;

use sparsemat_core::{FormatError, SparseError};
use thiserror::Error;

/// Result type alias using sparsemat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, saving or operating on matrices
#[derive(Error, Debug)]
pub enum Error {
    /// Operand shapes or arithmetic rejected by the engine
    #[error(transparent)]
    Matrix(#[from] SparseError),

    /// Malformed matrix text that did not come from a file
    #[error("Invalid matrix text: {0}")]
    Format(#[from] FormatError),

    /// Malformed matrix file
    #[error("Invalid matrix file {}: {source}", .path.display())]
    FileFormat {
        /// File being parsed
        path: PathBuf,
        /// What was wrong with it
        #[source]
        source: FormatError,
    },

    /// Failure reading or writing a file
    #[error("I/O error on {}: {source}", .path.display())]
    File {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failure on an interactive stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::File {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn file_format(path: impl Into<PathBuf>, source: FormatError) -> Self {
        Error::FileFormat {
            path: path.into(),
            source,
        }
    }
}
