//! # Coinage Store
//!
//! Wallet persistence for Coinage. The wallet file is treated as an opaque
//! per-node blob behind the [`WalletStore`] trait, keeping the key-pair
//! manager storage-agnostic.
//!
//! ## Key Types
//!
//! - [`WalletStore`] - The trait for all wallet blob storage
//! - [`FsWalletStore`] - Plain-text files under a root directory
//! - [`MemoryWalletStore`] - In-memory storage for tests
//!
//! ## Design Notes
//!
//! - All operations are synchronous: a wallet record is a single small
//!   blocking read or write, never a network wait.
//! - The store does not interpret the blob. Format and integrity checks
//!   belong to the wallet layer.
//! - One writer per node identity at a time is the caller's contract; the
//!   store itself holds no cross-call state.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use fs::FsWalletStore;
pub use memory::MemoryWalletStore;
pub use traits::WalletStore;
