//! # String Store
//!
//! Persistence for analyzed strings. Records are keyed by the SHA-256 of their
//! value, JSON-encoded, and written through a pluggable [`StorageBackend`]:
//!
//! - [`InMemoryBackend`]: a `HashMap` behind a `RwLock`, for tests and
//!   throwaway deployments.
//! - [`RedbBackend`]: a redb database file (feature `backend-redb`, on by
//!   default).
//!
//! [`StringStore`] is the high-level API used by the server: create, get,
//! list with a [`StringFilter`], and delete.
//!
//! ```
//! use store::{BackendConfig, StoreError, StringStore};
//! use analyzer::StringFilter;
//!
//! let store = StringStore::open(&BackendConfig::in_memory()).unwrap();
//! let record = store.create("racecar").unwrap();
//! assert!(record.properties.is_palindrome);
//!
//! assert!(matches!(store.create("racecar"), Err(StoreError::Conflict)));
//!
//! let palindromes = store.list(&StringFilter::new().with_palindrome(true)).unwrap();
//! assert_eq!(palindromes.len(), 1);
//!
//! store.delete("racecar").unwrap();
//! assert!(matches!(store.get("racecar"), Err(StoreError::NotFound)));
//! ```

mod backend;
mod record;

#[cfg(feature = "backend-redb")]
pub use backend::RedbBackend;
pub use backend::{BackendConfig, InMemoryBackend, StorageBackend};
pub use record::{StringProperties, StringRecord};

use analyzer::{analyze, sha256_hex, StringFilter};
use chrono::Utc;
use thiserror::Error;

/// Store error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("string already exists")]
    Conflict,
    #[error("string does not exist")]
    NotFound,
    #[error("backend error: {0}")]
    Backend(String),
    #[error("record encode error: {0}")]
    Encode(String),
    #[error("record decode error: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Analyzed-string store over a boxed backend.
pub struct StringStore {
    backend: Box<dyn StorageBackend>,
    kind: &'static str,
}

impl StringStore {
    /// Build the configured backend and wrap it.
    pub fn open(config: &BackendConfig) -> Result<Self, StoreError> {
        let backend = config.build()?;
        tracing::debug!(backend = config.kind(), "string store opened");
        Ok(Self {
            backend,
            kind: config.kind(),
        })
    }

    /// Wrap an already-built backend.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            kind: "custom",
        }
    }

    /// Backend name, e.g. `"redb"`.
    pub fn backend_kind(&self) -> &'static str {
        self.kind
    }

    /// Analyze `value` and persist it. Fails with [`StoreError::Conflict`] if
    /// the value is already stored.
    pub fn create(&self, value: &str) -> Result<StringRecord, StoreError> {
        let record = StringRecord::new(analyze(value), Utc::now());
        self.insert(&record)?;
        Ok(record)
    }

    /// Persist a prebuilt record under its id.
    pub fn insert(&self, record: &StringRecord) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(record).map_err(|e| StoreError::Encode(e.to_string()))?;
        if !self.backend.insert_new(&record.id, &bytes)? {
            return Err(StoreError::Conflict);
        }
        tracing::debug!(id = %record.id, length = record.properties.length, "string stored");
        Ok(())
    }

    /// Look up a record by its original value.
    pub fn get(&self, value: &str) -> Result<StringRecord, StoreError> {
        self.get_by_id(&sha256_hex(value))
    }

    /// Look up a record by id (SHA-256 hex of the value).
    pub fn get_by_id(&self, id: &str) -> Result<StringRecord, StoreError> {
        match self.backend.get(id)? {
            Some(bytes) => decode(&bytes),
            None => Err(StoreError::NotFound),
        }
    }

    /// Delete a record by its original value.
    pub fn delete(&self, value: &str) -> Result<(), StoreError> {
        let id = sha256_hex(value);
        if !self.backend.remove(&id)? {
            return Err(StoreError::NotFound);
        }
        tracing::debug!(id = %id, "string deleted");
        Ok(())
    }

    /// All records matching `filter`, oldest first.
    pub fn list(&self, filter: &StringFilter) -> Result<Vec<StringRecord>, StoreError> {
        let mut records = Vec::new();
        self.backend.scan(&mut |bytes| {
            let record = decode(bytes)?;
            if filter.matches(&record.analysis()) {
                records.push(record);
            }
            Ok(())
        })?;
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<usize, StoreError> {
        self.backend.len()
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        self.backend.flush()
    }
}

fn decode(bytes: &[u8]) -> Result<StringRecord, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> StringStore {
        StringStore::open(&BackendConfig::in_memory()).unwrap()
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = memory_store();
        let created = store.create("hello world").unwrap();
        let fetched = store.get("hello world").unwrap();
        assert_eq!(created, fetched);
        assert_eq!(fetched.analysis(), analyze("hello world"));
    }

    #[test]
    fn duplicate_create_conflicts() {
        let store = memory_store();
        store.create("dup").unwrap();
        assert_eq!(store.create("dup"), Err(StoreError::Conflict));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = memory_store();
        store.create("gone").unwrap();
        store.delete("gone").unwrap();
        assert_eq!(store.get("gone"), Err(StoreError::NotFound));
        assert_eq!(store.delete("gone"), Err(StoreError::NotFound));
    }

    #[test]
    fn values_are_case_sensitive_keys() {
        let store = memory_store();
        store.create("Level").unwrap();
        store.create("level").unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn empty_string_is_storable() {
        let store = memory_store();
        let record = store.create("").unwrap();
        assert_eq!(record.properties.length, 0);
        assert!(record.properties.is_palindrome);
        assert_eq!(store.get("").unwrap(), record);
    }

    #[test]
    fn list_applies_filter() {
        let store = memory_store();
        for value in ["racecar", "hello", "noon", "a man a plan"] {
            store.create(value).unwrap();
        }

        let all = store.list(&StringFilter::new()).unwrap();
        assert_eq!(all.len(), 4);

        let palindromes = store
            .list(&StringFilter::new().with_palindrome(true))
            .unwrap();
        let mut values: Vec<_> = palindromes.iter().map(|r| r.value.as_str()).collect();
        values.sort();
        assert_eq!(values, vec!["noon", "racecar"]);

        let long = store.list(&StringFilter::new().with_min_length(6)).unwrap();
        assert_eq!(long.len(), 2);
    }

    #[test]
    fn list_is_ordered_by_creation() {
        let store = memory_store();
        for value in ["first", "second", "third"] {
            store.create(value).unwrap();
        }
        let listed = store.list(&StringFilter::new()).unwrap();
        for pair in listed.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }
    }

    #[cfg(feature = "backend-redb")]
    #[test]
    fn redb_store_persists_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.redb");
        let config = BackendConfig::redb(path.to_string_lossy());

        let created = {
            let store = StringStore::open(&config).unwrap();
            assert_eq!(store.backend_kind(), "redb");
            store.create("persist me").unwrap()
        };

        let store = StringStore::open(&config).unwrap();
        assert_eq!(store.get("persist me").unwrap(), created);
        assert_eq!(store.create("persist me"), Err(StoreError::Conflict));
    }
}
