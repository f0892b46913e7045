//! Error types for the wallet.

use coinage_core::CoreError;
use coinage_store::StoreError;
use thiserror::Error;

use crate::format::FormatError;

/// Errors that can occur during wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Core error (key generation, encoding).
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Storage error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Malformed wallet record.
    #[error("wallet format error: {0}")]
    Format(#[from] FormatError),

    /// No wallet record exists for the node.
    #[error("no wallet record for node {0}")]
    MissingWallet(String),

    /// The wallet holds no key pair yet.
    #[error("wallet has no keys; generate or load them first")]
    NoKeys,
}

/// Result type for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;
