//! String key-value persistence.
//!
//! The catalog persists through a [`KeyValueStore`]: whole string values
//! under string keys, overwritten in full on every write.

mod file;
mod memory;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode storage file '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage '{path}' is already in use by another FlickFlow session")]
    Locked { path: PathBuf },
}

/// Persistent string store with overwrite semantics.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
