//! Error types for GridStore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using GridError
pub type Result<T> = std::result::Result<T, GridError>;

/// Unified error type for GridStore operations
///
/// `StorageUnavailable` and `StorageCorrupt` never escape
/// [`StorageAdapter::load`](crate::store::StorageAdapter::load) — the adapter
/// resolves both to the seed collection. They exist so the backends and the
/// envelope codec can report precisely what went wrong.
#[derive(Debug, Error)]
pub enum GridError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("No persistent store available")]
    StorageUnavailable,

    #[error("Stored collection invalid: {0}")]
    StorageCorrupt(String),

    #[error("Write failed: {0}")]
    WriteFailure(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
