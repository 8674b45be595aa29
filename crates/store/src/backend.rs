use crate::StoreError;
use std::collections::HashMap;
use std::sync::RwLock;

/// Trait for a key-value storage backend under the string store.
///
/// Every method is atomic with respect to concurrent callers: two racing
/// `insert_new` calls on the same key yield exactly one `true`.
pub trait StorageBackend: Send + Sync {
    /// Insert `value` under `key` unless the key is already present.
    /// Returns `false` (and leaves the existing value untouched) on a clash.
    fn insert_new(&self, key: &str, value: &[u8]) -> Result<bool, StoreError>;
    /// Retrieve a value by key.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    /// Remove a key. Returns whether it was present.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;
    /// Visit every stored value.
    fn scan(
        &self,
        visitor: &mut dyn FnMut(&[u8]) -> Result<(), StoreError>,
    ) -> Result<(), StoreError>;
    /// Number of stored entries.
    fn len(&self) -> Result<usize, StoreError>;
    /// Flush any buffered writes.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Configuration for selecting and building a backend.
///
/// ```
/// use store::BackendConfig;
///
/// let config = BackendConfig::in_memory();
/// let config = BackendConfig::redb("/data/strings.redb");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BackendConfig {
    /// Persistent storage in a redb database file at `path`.
    ///
    /// Requires the `backend-redb` feature (enabled by default).
    Redb { path: String },
    /// Ephemeral `HashMap` storage, lost on restart.
    #[default]
    InMemory,
}

impl BackendConfig {
    pub fn in_memory() -> Self {
        BackendConfig::InMemory
    }

    pub fn redb<P: Into<String>>(path: P) -> Self {
        BackendConfig::Redb { path: path.into() }
    }

    /// Short name used in logs and readiness output.
    pub fn kind(&self) -> &'static str {
        match self {
            BackendConfig::Redb { .. } => "redb",
            BackendConfig::InMemory => "memory",
        }
    }

    /// Build the backend described by this configuration.
    pub fn build(&self) -> Result<Box<dyn StorageBackend>, StoreError> {
        match self {
            BackendConfig::InMemory => Ok(Box::new(InMemoryBackend::new())),
            BackendConfig::Redb { path } => {
                #[cfg(feature = "backend-redb")]
                {
                    Ok(Box::new(RedbBackend::open(path)?))
                }
                #[cfg(not(feature = "backend-redb"))]
                {
                    let _ = path;
                    Err(StoreError::backend("redb backend disabled at compile time"))
                }
            }
        }
    }
}

/// An in-memory backend using a `RwLock` around a `HashMap`.
pub struct InMemoryBackend {
    records: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for InMemoryBackend {
    fn insert_new(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        // Check and insert under one write lock.
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        if guard.contains_key(key) {
            return Ok(false);
        }
        guard.insert(key.to_string(), value.to_vec());
        Ok(true)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?
            .remove(key)
            .is_some())
    }

    fn scan(
        &self,
        visitor: &mut dyn FnMut(&[u8]) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        for value in guard.values() {
            visitor(value)?;
        }
        Ok(())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?
            .len())
    }
}

#[cfg(feature = "backend-redb")]
pub mod redb;

#[cfg(feature = "backend-redb")]
pub use self::redb::RedbBackend;
