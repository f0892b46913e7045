//! The Wallet: key lifecycle and transaction signing for one node.
//!
//! A wallet owns at most one key pair at a time. Generation replaces the
//! pair atomically (a single `Option` assignment), persistence goes through
//! the storage-agnostic [`WalletStore`] trait, and signing binds the
//! wallet's identity to the (recipient, amount) it authorizes.

use coinage_core::{Identity, Keypair, NodeId, Transaction, TransactionDraft};
use coinage_store::WalletStore;
use rand::{CryptoRng, RngCore};

use crate::error::{Result, WalletError};
use crate::format;

/// A wallet bound to one node identity.
///
/// Exclusive owner of that node's key pair: no sharing across nodes. The
/// key material is immutable after load, so concurrent signing through a
/// shared reference is safe; generation and persistence take `&mut self`
/// and are therefore one-writer by construction.
pub struct Wallet<S: WalletStore> {
    node_id: NodeId,
    keypair: Option<Keypair>,
    store: S,
}

impl<S: WalletStore> Wallet<S> {
    /// Create a wallet with no keys.
    ///
    /// Keys are never auto-generated: creation, loading, and generation are
    /// separate, explicit steps.
    pub fn new(node_id: NodeId, store: S) -> Self {
        Self {
            node_id,
            keypair: None,
            store,
        }
    }

    /// The node this wallet belongs to.
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// Whether a key pair is currently held.
    pub fn has_keys(&self) -> bool {
        self.keypair.is_some()
    }

    /// The held key pair, if any.
    pub fn keypair(&self) -> Option<&Keypair> {
        self.keypair.as_ref()
    }

    /// This wallet's identity (hex public key), if keys are present.
    pub fn identity(&self) -> Option<Identity> {
        self.keypair
            .as_ref()
            .map(|kp| Identity::from_public_key(&kp.public_key()))
    }

    /// The hex-encoded public key, if keys are present.
    pub fn public_key_hex(&self) -> Option<String> {
        self.keypair.as_ref().map(|kp| kp.public_key().to_hex())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Key Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Generate a fresh key pair, replacing any held pair atomically.
    ///
    /// Entropy-source failure is fatal and reported as
    /// [`coinage_core::CoreError::KeyGeneration`].
    pub fn create_keys(&mut self) -> Result<Identity> {
        let keypair = Keypair::try_generate()?;
        let identity = Identity::from_public_key(&keypair.public_key());
        self.keypair = Some(keypair);
        tracing::debug!(node_id = %self.node_id, identity = %identity, "generated key pair");
        Ok(identity)
    }

    /// Generate a key pair from an injected randomness provider.
    ///
    /// A seeded provider makes the wallet's keys deterministic for tests.
    pub fn create_keys_with<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Identity {
        let keypair = Keypair::generate_with(rng);
        let identity = Identity::from_public_key(&keypair.public_key());
        self.keypair = Some(keypair);
        identity
    }

    /// Persist the held key pair to the store.
    ///
    /// Failure is logged and reported as a result, never a panic; the
    /// caller decides whether it is fatal.
    pub fn save_keys(&self) -> Result<()> {
        let keypair = self.keypair.as_ref().ok_or(WalletError::NoKeys)?;
        let record = format::encode_record(keypair);
        if let Err(e) = self.store.put(&self.node_id, record.as_bytes()) {
            tracing::warn!(node_id = %self.node_id, error = %e, "saving wallet failed");
            return Err(e.into());
        }
        Ok(())
    }

    /// Load the key pair from the store, replacing any held pair.
    ///
    /// A missing or malformed record is an error result at this level;
    /// it never escapes as a panic or an uncaught I/O fault.
    pub fn load_keys(&mut self) -> Result<()> {
        let blob = match self.store.get(&self.node_id) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::warn!(node_id = %self.node_id, "no wallet record to load");
                return Err(WalletError::MissingWallet(self.node_id.to_string()));
            }
            Err(e) => {
                tracing::warn!(node_id = %self.node_id, error = %e, "loading wallet failed");
                return Err(e.into());
            }
        };

        let keypair = format::parse_record(&blob)?;
        self.keypair = Some(keypair);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Signing
    // ─────────────────────────────────────────────────────────────────────

    /// Sign a transfer from this wallet's identity.
    ///
    /// Reads the private key, never mutates it: concurrent signs through
    /// shared references are safe.
    pub fn sign_transaction(&self, recipient: &str, amount: u64) -> Result<Transaction> {
        let keypair = self.keypair.as_ref().ok_or(WalletError::NoKeys)?;
        let sender = Identity::from_public_key(&keypair.public_key());
        Ok(TransactionDraft::new(sender, recipient, amount).sign(keypair))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_core::verify;
    use coinage_store::MemoryWalletStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_wallet() -> Wallet<MemoryWalletStore> {
        Wallet::new(NodeId::new("test-node"), MemoryWalletStore::new())
    }

    #[test]
    fn test_new_wallet_has_no_keys() {
        let wallet = test_wallet();
        assert!(!wallet.has_keys());
        assert!(wallet.identity().is_none());
    }

    #[test]
    fn test_sign_without_keys_is_no_keys_error() {
        let wallet = test_wallet();
        assert!(matches!(
            wallet.sign_transaction("B", 10),
            Err(WalletError::NoKeys)
        ));
    }

    #[test]
    fn test_save_without_keys_is_no_keys_error() {
        let wallet = test_wallet();
        assert!(matches!(wallet.save_keys(), Err(WalletError::NoKeys)));
    }

    #[test]
    fn test_create_keys_replaces_pair_atomically() {
        let mut wallet = test_wallet();
        let first = wallet.create_keys().unwrap();
        let second = wallet.create_keys().unwrap();

        assert_ne!(first, second);
        // The held pair matches the second identity entirely
        assert_eq!(wallet.identity().unwrap(), second);
    }

    #[test]
    fn test_seeded_creation_is_deterministic() {
        let mut w1 = test_wallet();
        let mut w2 = test_wallet();
        let id1 = w1.create_keys_with(&mut StdRng::seed_from_u64(9));
        let id2 = w2.create_keys_with(&mut StdRng::seed_from_u64(9));
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemoryWalletStore::new();
        let node = NodeId::new("test-node");

        let mut writer = Wallet::new(node.clone(), &store);
        writer.create_keys().unwrap();
        writer.save_keys().unwrap();

        let mut reader = Wallet::new(node, &store);
        reader.load_keys().unwrap();

        assert_eq!(
            reader.keypair().unwrap().public_key(),
            writer.keypair().unwrap().public_key()
        );
        assert_eq!(
            reader.keypair().unwrap().seed(),
            writer.keypair().unwrap().seed()
        );
    }

    #[test]
    fn test_load_missing_wallet() {
        let mut wallet = test_wallet();
        assert!(matches!(
            wallet.load_keys(),
            Err(WalletError::MissingWallet(_))
        ));
    }

    #[test]
    fn test_load_malformed_record() {
        let store = MemoryWalletStore::new();
        let node = NodeId::new("test-node");
        store.put(&node, b"garbage that is not a wallet\n").unwrap();

        let mut wallet = Wallet::new(node, &store);
        assert!(matches!(wallet.load_keys(), Err(WalletError::Format(_))));
    }

    #[test]
    fn test_signed_transaction_verifies() {
        let mut wallet = test_wallet();
        wallet.create_keys().unwrap();

        let tx = wallet.sign_transaction("B", 10).unwrap();
        assert!(verify(&tx));
        assert_eq!(tx.sender(), &wallet.identity().unwrap());
        assert_eq!(tx.recipient(), "B");
        assert_eq!(tx.amount(), 10);
    }
}
