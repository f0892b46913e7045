//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Store failures are recoverable: the caller may retry, or prompt for key
/// regeneration. They are always reported as results, never panics.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
