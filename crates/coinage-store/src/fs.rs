//! Filesystem implementation of the WalletStore trait.
//!
//! One plain-text file per node under a root directory, named
//! deterministically from the node identifier: `wallet-{node_id}.txt`.
//! No checksum, no encryption; file integrity is the caller's
//! responsibility.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use coinage_core::NodeId;

use crate::error::Result;
use crate::traits::WalletStore;

/// Wallet storage as plain-text files under a root directory.
pub struct FsWalletStore {
    root: PathBuf,
}

impl FsWalletStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The deterministic path of a node's wallet file.
    pub fn wallet_path(&self, node_id: &NodeId) -> PathBuf {
        self.root.join(format!("wallet-{node_id}.txt"))
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WalletStore for FsWalletStore {
    fn put(&self, node_id: &NodeId, blob: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.wallet_path(node_id);

        // The handle is scoped to this block: flushed, then closed on every
        // exit path, including write errors.
        let mut file = File::create(&path)?;
        file.write_all(blob)?;
        file.flush()?;

        tracing::debug!(node_id = %node_id, path = %path.display(), "wallet record written");
        Ok(())
    }

    fn get(&self, node_id: &NodeId) -> Result<Option<Vec<u8>>> {
        match fs::read(self.wallet_path(node_id)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, node_id: &NodeId) -> Result<bool> {
        Ok(self.wallet_path(node_id).exists())
    }
}
