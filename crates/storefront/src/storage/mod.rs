//! Key/value storage for persisted visitor state.
//!
//! The storefront keeps a single visitor cart under a fixed key, the same way
//! a browser page would use local storage. Backends store opaque strings; the
//! cart store owns the encoding.
//!
//! # Backends
//!
//! - [`MemoryStore`] - process-local map, lost on exit
//! - [`FileStore`] - one JSON object file on disk

mod file;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("storage file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage.
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key/value store.
///
/// Writes are synchronous: when `set_item` returns `Ok`, a later `get_item`
/// (from this or a new process, for durable backends) sees the value.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Where visitor state is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory only.
    Memory,
    /// JSON file at the given path.
    File(PathBuf),
}

impl StorageBackend {
    /// Parse a backend from a setting: `memory` or a file path.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("memory") {
            Self::Memory
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Open the configured store.
    #[must_use]
    pub fn open(&self) -> Arc<dyn KeyValueStore> {
        match self {
            Self::Memory => Arc::new(MemoryStore::new()),
            Self::File(path) => Arc::new(FileStore::new(path.clone())),
        }
    }
}
