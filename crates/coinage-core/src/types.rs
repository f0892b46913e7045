//! Strong type definitions for Coinage.
//!
//! Identifiers and wire-side credentials are newtypes to prevent misuse at
//! compile time. `Identity` and `TxSignature` hold the *claimed* hex form:
//! they are only decoded at verification time, so malformed wire input can
//! be rejected as a verification failure instead of a crash.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::crypto::Ed25519PublicKey;
use crate::error::CoreError;

/// The string identifier of a node, used to key the wallet file.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new node id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A sender identity: the hex-encoded public key credential, plus an
/// optional human-readable alias.
///
/// On the wire and in canonical bytes the sender field *is* the hex public
/// key; the alias is local metadata and never serialized. The hex is a
/// claim until [`Identity::public_key`] decodes it, which lets verification
/// treat malformed claims as a plain `false`.
#[derive(Clone)]
pub struct Identity {
    key_hex: String,
    alias: Option<String>,
}

impl Identity {
    /// Create an identity from a known-good public key.
    pub fn from_public_key(public_key: &Ed25519PublicKey) -> Self {
        Self {
            key_hex: public_key.to_hex(),
            alias: None,
        }
    }

    /// Create an identity from a wire-side claim.
    ///
    /// The hex is not validated here; a bogus claim surfaces as a failed
    /// verification, never as an error.
    pub fn from_claim(key_hex: impl Into<String>) -> Self {
        Self {
            key_hex: key_hex.into(),
            alias: None,
        }
    }

    /// Attach a human-readable alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The hex-encoded public key claim.
    pub fn as_hex(&self) -> &str {
        &self.key_hex
    }

    /// The alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Decode the claimed credential into a public key.
    pub fn public_key(&self) -> Result<Ed25519PublicKey, CoreError> {
        Ed25519PublicKey::from_hex(&self.key_hex)
    }
}

// Equality is on the credential only: the alias is local decoration and two
// identities with the same key are the same party.
impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.key_hex == other.key_hex
    }
}

impl Eq for Identity {}

impl std::hash::Hash for Identity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key_hex.hash(state);
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = self.key_hex.get(..16).unwrap_or(&self.key_hex);
        match &self.alias {
            Some(alias) => write!(f, "Identity({}..., {:?})", short, alias),
            None => write!(f, "Identity({}...)", short),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => f.write_str(alias),
            None => f.write_str(self.key_hex.get(..16).unwrap_or(&self.key_hex)),
        }
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key_hex)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key_hex = String::deserialize(deserializer)?;
        Ok(Self::from_claim(key_hex))
    }
}

/// A hex-encoded transaction signature.
///
/// Like [`Identity`], this holds the claimed hex form and defers decoding:
/// verification of a truncated or non-hex signature must return `false`,
/// not fail.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TxSignature(String);

impl TxSignature {
    /// Wrap a hex-encoded signature claim.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Encode a raw 64-byte signature.
    pub fn from_bytes(bytes: &[u8; 64]) -> Self {
        Self(hex::encode(bytes))
    }

    /// The hex form.
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Decode into the raw 64-byte signature.
    pub fn to_bytes(&self) -> Result<[u8; 64], CoreError> {
        let bytes = hex::decode(&self.0).map_err(|_| CoreError::InvalidSignature)?;
        let arr: [u8; 64] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CoreError::InvalidSignature)?;
        Ok(arr)
    }
}

impl fmt::Debug for TxSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sig({}...)", self.0.get(..16).unwrap_or(&self.0))
    }
}

impl Serialize for TxSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TxSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Ok(Self(hex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Keypair;

    #[test]
    fn test_identity_roundtrips_public_key() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let identity = Identity::from_public_key(&keypair.public_key());
        assert_eq!(identity.public_key().unwrap(), keypair.public_key());
    }

    #[test]
    fn test_identity_alias_does_not_affect_equality() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let plain = Identity::from_public_key(&keypair.public_key());
        let aliased = plain.clone().with_alias("alice");
        assert_eq!(plain, aliased);
        assert_eq!(aliased.alias(), Some("alice"));
    }

    #[test]
    fn test_identity_serializes_as_bare_hex() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let identity = Identity::from_public_key(&keypair.public_key()).with_alias("alice");
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, format!("\"{}\"", keypair.public_key().to_hex()));
    }

    #[test]
    fn test_malformed_claim_fails_decode_not_construction() {
        let identity = Identity::from_claim("zz-not-hex");
        assert!(identity.public_key().is_err());
    }

    #[test]
    fn test_signature_rejects_truncated_hex() {
        assert!(TxSignature::from_hex("abcd").to_bytes().is_err());
        assert!(TxSignature::from_hex("not hex at all").to_bytes().is_err());
    }

    #[test]
    fn test_signature_bytes_roundtrip() {
        let sig = TxSignature::from_bytes(&[0xab; 64]);
        assert_eq!(sig.to_bytes().unwrap(), [0xab; 64]);
    }

    #[test]
    fn test_short_claim_debug_does_not_panic() {
        let identity = Identity::from_claim("ab");
        let _ = format!("{:?} {}", identity, identity);
        let sig = TxSignature::from_hex("ab");
        let _ = format!("{:?}", sig);
    }
}
