//! Error types for Coinage Core.

use thiserror::Error;

/// Core errors for hashing, encoding, and key operations.
///
/// Signature verification never surfaces these: [`crate::verify`] is total
/// and collapses every failure into `false`. The variants here belong to the
/// fallible constructors and the canonical encoder.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record contained a field the canonical encoder cannot serialize.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The entropy source failed while generating a key pair.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("invalid signature")]
    InvalidSignature,
}
