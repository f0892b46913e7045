//! # Coinage Core
//!
//! Pure primitives for the Coinage ledger: deterministic hashing, key pairs,
//! and transaction signing/verification.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`Sha256Hash`] - The fixed 256-bit digest used for content addressing
//! - [`Keypair`] - An Ed25519 key pair bound to a wallet
//! - [`Identity`] - A sender credential (hex public key plus optional alias)
//! - [`Transaction`] - A signed transfer; immutable once signed
//!
//! ## Canonicalization
//!
//! Records destined for hashing are encoded as sorted-key JSON text. See the
//! [`canonical`] module.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod transaction;
pub mod types;

pub use canonical::{canonicalize, hash_block};
pub use crypto::{Ed25519PublicKey, Keypair, Sha256Hash};
pub use error::CoreError;
pub use transaction::{sign_fields, verify, Transaction, TransactionDraft};
pub use types::{Identity, NodeId, TxSignature};
