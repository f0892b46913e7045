//! In-memory implementation of the WalletStore trait.
//!
//! This is primarily for testing. Same semantics as the filesystem store,
//! but nothing survives drop. Thread-safe via RwLock.

use std::collections::HashMap;
use std::sync::RwLock;

use coinage_core::NodeId;

use crate::error::Result;
use crate::traits::WalletStore;

/// In-memory wallet store.
pub struct MemoryWalletStore {
    records: RwLock<HashMap<NodeId, Vec<u8>>>,
}

impl MemoryWalletStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryWalletStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletStore for MemoryWalletStore {
    fn put(&self, node_id: &NodeId, blob: &[u8]) -> Result<()> {
        let mut records = self.records.write().unwrap();
        records.insert(node_id.clone(), blob.to_vec());
        Ok(())
    }

    fn get(&self, node_id: &NodeId) -> Result<Option<Vec<u8>>> {
        let records = self.records.read().unwrap();
        Ok(records.get(node_id).cloned())
    }

    fn exists(&self, node_id: &NodeId) -> Result<bool> {
        let records = self.records.read().unwrap();
        Ok(records.contains_key(node_id))
    }
}
