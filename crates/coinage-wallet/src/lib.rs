//! # Coinage Wallet
//!
//! The unified API for Coinage identity: a wallet bound to a node that
//! creates, persists, and loads its key pair and signs transactions.
//!
//! ## Overview
//!
//! - **Keys**: One Ed25519 pair per node, replaced atomically on
//!   regeneration. Both halves exist together or not at all.
//! - **Persistence**: A versioned plain-text record behind the
//!   storage-agnostic [`WalletStore`] trait.
//! - **Signing**: Binds the (sender, recipient, amount) triple to a
//!   signature; verification is a total boolean check.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use coinage_wallet::{Wallet, FsWalletStore, NodeId};
//!
//! let store = FsWalletStore::new("wallets");
//! let mut wallet = Wallet::new(NodeId::new("node-a"), store);
//!
//! wallet.create_keys().unwrap();
//! wallet.save_keys().unwrap();
//!
//! let tx = wallet.sign_transaction("recipient-b", 10).unwrap();
//! assert!(coinage_wallet::verify(&tx));
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `coinage_wallet::core` - Core primitives (hashing, signing, identity)
//! - `coinage_wallet::store` - Storage abstraction and backends

pub mod error;
pub mod format;
pub mod wallet;

// Re-export component crates
pub use coinage_core as core;
pub use coinage_store as store;

// Re-export main types for convenience
pub use error::{Result, WalletError};
pub use format::FormatError;
pub use wallet::Wallet;

// Re-export commonly used core and store types
pub use coinage_core::{
    canonicalize, hash_block, sign_fields, verify, Identity, Keypair, NodeId, Transaction,
    TransactionDraft, TxSignature,
};
pub use coinage_store::{FsWalletStore, MemoryWalletStore, WalletStore};
