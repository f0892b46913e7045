//! Canonical JSON encoding for deterministic hashing.
//!
//! Records are rendered as JSON text with object keys sorted
//! lexicographically at every nesting level, then encoded as UTF-8 bytes.
//! The canonical encoding is critical: two structurally equal records must
//! produce identical bytes (and thus identical hashes) regardless of how or
//! in what order they were constructed.
//!
//! The sort comes from routing every record through [`serde_json::Value`],
//! whose object representation is a BTreeMap. The `preserve_order` feature
//! of serde_json must never be enabled in this workspace.

use serde::Serialize;

use crate::crypto::Sha256Hash;
use crate::error::CoreError;

/// Encode a record to canonical bytes.
///
/// Embedded transactions participate through their `Serialize` impl, which
/// emits the fixed (sender, recipient, amount, signature) field set. Empty
/// sequences encode as `[]`, never as an omitted field.
///
/// Fails with [`CoreError::Encoding`] if a field is not serializable, which
/// indicates a caller bug.
pub fn canonicalize<T: Serialize>(record: &T) -> Result<Vec<u8>, CoreError> {
    let value = serde_json::to_value(record).map_err(|e| CoreError::Encoding(e.to_string()))?;
    let text = serde_json::to_string(&value).map_err(|e| CoreError::Encoding(e.to_string()))?;
    Ok(text.into_bytes())
}

/// Hash a block for chain linkage: SHA-256 over the canonical bytes,
/// rendered as lowercase hex.
///
/// This is the whole hashing contract the ledger consumes. The ledger
/// supplies blocks whose transactions already expose their canonical field
/// ordering via `Serialize`.
pub fn hash_block<B: Serialize>(block: &B) -> Result<String, CoreError> {
    let bytes = canonicalize(block)?;
    Ok(Sha256Hash::hash(&bytes).to_hex())
}
