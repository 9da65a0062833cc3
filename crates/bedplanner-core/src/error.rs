//! Error handling for BedPlanner
//!
//! Provides error types for the layers that can actually fail:
//! - Catalog errors (reading the plant catalog)
//! - Storage errors (the key-value store behind the recovery slot)
//!
//! Malformed rows are not errors: they are dropped or defaulted where they
//! are parsed. All error types use `thiserror`.

use thiserror::Error;

/// Catalog error type
///
/// Raised when the catalog source cannot be read at all.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path}: {reason}")]
    Unreadable {
        /// Path of the catalog file.
        path: String,
        /// The underlying failure.
        reason: String,
    },

    /// The catalog text has no header row
    #[error("Catalog has no header row")]
    MissingHeader,

    /// No row survived validation
    #[error("Catalog contains no usable plant entries")]
    NoEntries,
}

/// Storage error type
///
/// Represents failures of the key-value store used for crash recovery.
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    /// Key is empty or cannot be mapped to a storage location
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Reading a value failed
    #[error("Failed to read {key}: {reason}")]
    Read {
        /// The key being read.
        key: String,
        /// The underlying failure.
        reason: String,
    },

    /// Writing a value failed
    #[error("Failed to write {key}: {reason}")]
    Write {
        /// The key being written.
        key: String,
        /// The underlying failure.
        reason: String,
    },
}
