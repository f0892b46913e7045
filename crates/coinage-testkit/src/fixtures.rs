//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a wallet over an in-memory
//! store, optionally with deterministic keys.

use coinage_core::{Identity, NodeId, Transaction};
use coinage_store::MemoryWalletStore;
use coinage_wallet::Wallet;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A wallet fixture backed by an in-memory store, with keys installed.
pub struct WalletFixture {
    pub wallet: Wallet<MemoryWalletStore>,
}

impl WalletFixture {
    /// Create a fixture for node `test-node` with fresh random keys.
    pub fn new() -> Self {
        Self::for_node("test-node")
    }

    /// Create a fixture for the given node with fresh random keys.
    pub fn for_node(node_id: &str) -> Self {
        let mut wallet = Wallet::new(NodeId::new(node_id), MemoryWalletStore::new());
        wallet
            .create_keys()
            .expect("entropy source available in tests");
        Self { wallet }
    }

    /// Create a fixture with deterministic keys from a seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        let mut wallet = Wallet::new(NodeId::new("test-node"), MemoryWalletStore::new());
        wallet.create_keys_with(&mut StdRng::from_seed(seed));
        Self { wallet }
    }

    /// The fixture wallet's identity.
    pub fn identity(&self) -> Identity {
        self.wallet.identity().expect("fixture wallet has keys")
    }

    /// Sign a transfer from the fixture wallet.
    pub fn sign(&self, recipient: &str, amount: u64) -> Transaction {
        self.wallet
            .sign_transaction(recipient, amount)
            .expect("fixture wallet has keys")
    }
}

impl Default for WalletFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple fixtures with distinct deterministic keys.
pub fn multi_party_fixtures(count: usize) -> Vec<WalletFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            WalletFixture::with_seed(seed)
        })
        .collect()
}
