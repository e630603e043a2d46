//! Key-value blob persistence for the client stores.
//!
//! Every store snapshot lives under a fixed key as one JSON value. The
//! [`BlobStore`] trait is the injection seam: production code uses
//! [`FileBlobStore`], tests use [`MemoryBlobStore`]. Writes are
//! last-write-wins; there is no transaction or merge machinery.

mod file;
mod memory;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlobError>;

/// Raw string-valued key-value storage.
///
/// Object-safe so consumers can share one store via `Arc<dyn BlobStore>`.
pub trait BlobStore: Send + Sync {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;
    fn put_raw(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Typed access over the raw trait: values round-trip through JSON.
pub trait BlobStoreExt: BlobStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.put_raw(key, &serde_json::to_string(value)?)
    }
}

impl<S: BlobStore + ?Sized> BlobStoreExt for S {}
