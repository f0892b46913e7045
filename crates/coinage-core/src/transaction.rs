//! Transaction signing and verification.
//!
//! A transaction moves through exactly one state transition,
//! `Unsigned -> Signed`, and the types enforce it: [`TransactionDraft`] is
//! the unsigned form, [`TransactionDraft::sign`] consumes nothing but
//! produces the sealed [`Transaction`], whose fields are private. There is
//! no way back; "mutating" a signed transaction means constructing a new
//! one via [`Transaction::with_signature`], and any change to the
//! (sender, recipient, amount) triple makes the old signature fail
//! verification.
//!
//! The signed message is the UTF-8 byte string
//! `sender_hex || recipient || amount` (decimal amount), hashed with
//! SHA-256; the Ed25519 signature is computed over the 32-byte digest.

use serde::{Deserialize, Serialize};

use crate::crypto::{Keypair, Sha256Hash};
use crate::types::{Identity, TxSignature};

/// An unsigned transaction: the semantic triple, ready to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    sender: Identity,
    recipient: String,
    amount: u64,
}

impl TransactionDraft {
    /// Create a draft for the given triple.
    pub fn new(sender: Identity, recipient: impl Into<String>, amount: u64) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
            amount,
        }
    }

    /// Sign the draft, sealing it into a [`Transaction`].
    pub fn sign(self, keypair: &Keypair) -> Transaction {
        let signature = sign_fields(keypair, &self.sender, &self.recipient, self.amount);
        Transaction {
            sender: self.sender,
            recipient: self.recipient,
            amount: self.amount,
            signature,
        }
    }
}

/// A signed transaction. Immutable once built.
///
/// Field order of the `Serialize` impl is the canonical ordered-field form
/// consumed by the canonical encoder: (sender, recipient, amount,
/// signature).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    sender: Identity,
    recipient: String,
    amount: u64,
    signature: TxSignature,
}

impl Transaction {
    /// Reconstruct a claimed transaction from wire data.
    ///
    /// Nothing is validated here; the claim stands or falls with
    /// [`verify`].
    pub fn with_signature(
        sender: Identity,
        recipient: impl Into<String>,
        amount: u64,
        signature: TxSignature,
    ) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
            amount,
            signature,
        }
    }

    pub fn sender(&self) -> &Identity {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn signature(&self) -> &TxSignature {
        &self.signature
    }
}

/// The exact byte string that gets hashed and signed.
fn signing_message(sender_hex: &str, recipient: &str, amount: u64) -> Vec<u8> {
    format!("{sender_hex}{recipient}{amount}").into_bytes()
}

/// Sign the (sender, recipient, amount) triple with the given key.
///
/// Returns the hex-encoded signature over the SHA-256 digest of the
/// signing message.
pub fn sign_fields(
    keypair: &Keypair,
    sender: &Identity,
    recipient: &str,
    amount: u64,
) -> TxSignature {
    let digest = Sha256Hash::hash(&signing_message(sender.as_hex(), recipient, amount));
    TxSignature::from_bytes(&keypair.sign(digest.as_bytes()))
}

/// Verify a transaction's signature against its claimed sender.
///
/// Total over all inputs: a malformed sender claim, a malformed or
/// truncated signature, or a genuinely invalid signature all return
/// `false`. This function never panics and never returns an error, so
/// crafted input cannot crash the security check.
pub fn verify(transaction: &Transaction) -> bool {
    let public_key = match transaction.sender().public_key() {
        Ok(pk) => pk,
        Err(_) => return false,
    };
    let signature = match transaction.signature().to_bytes() {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    let digest = Sha256Hash::hash(&signing_message(
        transaction.sender().as_hex(),
        transaction.recipient(),
        transaction.amount(),
    ));
    public_key.verify(digest.as_bytes(), &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Keypair;

    fn signed_tx(keypair: &Keypair, recipient: &str, amount: u64) -> Transaction {
        let sender = Identity::from_public_key(&keypair.public_key());
        TransactionDraft::new(sender, recipient, amount).sign(keypair)
    }

    #[test]
    fn test_sign_then_verify() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let tx = signed_tx(&keypair, "B", 10);
        assert!(verify(&tx));
    }

    #[test]
    fn test_recipient_mutation_invalidates() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let tx = signed_tx(&keypair, "B", 10);

        let tampered = Transaction::with_signature(
            tx.sender().clone(),
            "C",
            tx.amount(),
            tx.signature().clone(),
        );
        assert!(!verify(&tampered));
    }

    #[test]
    fn test_amount_mutation_invalidates() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let tx = signed_tx(&keypair, "B", 10);

        let tampered = Transaction::with_signature(
            tx.sender().clone(),
            tx.recipient().to_owned(),
            11,
            tx.signature().clone(),
        );
        assert!(!verify(&tampered));
    }

    #[test]
    fn test_sender_mutation_invalidates() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let other = Keypair::from_seed(&[0x43; 32]);
        let tx = signed_tx(&keypair, "B", 10);

        let tampered = Transaction::with_signature(
            Identity::from_public_key(&other.public_key()),
            tx.recipient().to_owned(),
            tx.amount(),
            tx.signature().clone(),
        );
        assert!(!verify(&tampered));
    }

    #[test]
    fn test_corrupted_signature_is_false_not_panic() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let tx = signed_tx(&keypair, "B", 10);
        let sender = tx.sender().clone();

        // Non-hex
        let bad = Transaction::with_signature(
            sender.clone(),
            "B",
            10,
            TxSignature::from_hex("zz not hex"),
        );
        assert!(!verify(&bad));

        // Truncated
        let truncated = Transaction::with_signature(
            sender.clone(),
            "B",
            10,
            TxSignature::from_hex(&tx.signature().as_hex()[..32]),
        );
        assert!(!verify(&truncated));

        // Empty
        let empty = Transaction::with_signature(sender, "B", 10, TxSignature::from_hex(""));
        assert!(!verify(&empty));
    }

    #[test]
    fn test_malformed_sender_is_false_not_panic() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let tx = signed_tx(&keypair, "B", 10);

        let bad_sender = Transaction::with_signature(
            Identity::from_claim("definitely-not-a-key"),
            "B",
            10,
            tx.signature().clone(),
        );
        assert!(!verify(&bad_sender));

        // Right length, but not a valid hex encoding
        let wrong_len = Transaction::with_signature(
            Identity::from_claim("abcd"),
            "B",
            10,
            tx.signature().clone(),
        );
        assert!(!verify(&wrong_len));
    }

    #[test]
    fn test_signing_message_layout() {
        assert_eq!(signing_message("ab", "B", 10), b"abB10".to_vec());
        // The amount uses its decimal string form
        assert_eq!(signing_message("", "", 0), b"0".to_vec());
    }

    #[test]
    fn test_canonical_field_order_in_serialization() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let tx = signed_tx(&keypair, "B", 10);
        let value = serde_json::to_value(&tx).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["sender"], keypair.public_key().to_hex());
        assert_eq!(object["recipient"], "B");
        assert_eq!(object["amount"], 10);
        assert_eq!(object["signature"], tx.signature().as_hex());
    }

    #[test]
    fn test_transaction_serde_roundtrip() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let tx = signed_tx(&keypair, "B", 10);

        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
        assert!(verify(&parsed));
    }
}
