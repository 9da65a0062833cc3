//! Error types for layout persistence.

use bedplanner_core::StorageError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while saving or loading a layout.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// A layout file could not be read.
    #[error("Failed to read layout {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A layout file could not be written.
    #[error("Failed to write layout {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The recovery store failed.
    #[error("Recovery store error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;
