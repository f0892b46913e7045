//! WalletStore trait: the abstract interface for wallet persistence.
//!
//! This trait allows the wallet to be storage-agnostic. Implementations
//! include the filesystem (primary) and in-memory (for tests).

use std::sync::Arc;

use coinage_core::NodeId;

use crate::error::Result;

/// The WalletStore trait: an opaque per-node key-value blob store.
///
/// The blob is the serialized wallet record; the store never interprets it.
/// A missing record is `Ok(None)`, not an error: whether that is fatal is
/// the wallet layer's call.
pub trait WalletStore: Send + Sync {
    /// Write the wallet blob for a node, replacing any previous record.
    fn put(&self, node_id: &NodeId, blob: &[u8]) -> Result<()>;

    /// Read the wallet blob for a node, if one exists.
    fn get(&self, node_id: &NodeId) -> Result<Option<Vec<u8>>>;

    /// Check whether a wallet record exists for a node.
    fn exists(&self, node_id: &NodeId) -> Result<bool> {
        Ok(self.get(node_id)?.is_some())
    }
}

impl<S: WalletStore + ?Sized> WalletStore for &S {
    fn put(&self, node_id: &NodeId, blob: &[u8]) -> Result<()> {
        (**self).put(node_id, blob)
    }

    fn get(&self, node_id: &NodeId) -> Result<Option<Vec<u8>>> {
        (**self).get(node_id)
    }

    fn exists(&self, node_id: &NodeId) -> Result<bool> {
        (**self).exists(node_id)
    }
}

impl<S: WalletStore + ?Sized> WalletStore for Arc<S> {
    fn put(&self, node_id: &NodeId, blob: &[u8]) -> Result<()> {
        (**self).put(node_id, blob)
    }

    fn get(&self, node_id: &NodeId) -> Result<Option<Vec<u8>>> {
        (**self).get(node_id)
    }

    fn exists(&self, node_id: &NodeId) -> Result<bool> {
        (**self).exists(node_id)
    }
}
