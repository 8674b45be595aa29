//! Redb backend for persistent string storage.
//!
//! Redb is a pure Rust embedded key-value store with ACID transactions. Each
//! backend call runs in its own transaction, so a check-then-insert is atomic
//! against concurrent writers (redb serializes write transactions).

use crate::{StorageBackend, StoreError};
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Table holding `sha256 id -> encoded record`.
const STRINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("strings");

/// Redb backend. The `Arc<Database>` is shared across threads; redb handles
/// its own locking and MVCC.
pub struct RedbBackend {
    db: Arc<Database>,
}

impl RedbBackend {
    /// Open or create a database at `path` and make sure the table exists.
    ///
    /// ```no_run
    /// use store::RedbBackend;
    ///
    /// let backend = RedbBackend::open("/tmp/strings.redb").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = Database::create(path).map_err(StoreError::backend)?;

        let write_txn = db.begin_write().map_err(StoreError::backend)?;
        {
            // Opening the table in a write txn creates it.
            let _table = write_txn
                .open_table(STRINGS_TABLE)
                .map_err(StoreError::backend)?;
        }
        write_txn.commit().map_err(StoreError::backend)?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl StorageBackend for RedbBackend {
    fn insert_new(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write().map_err(StoreError::backend)?;

        let inserted = {
            let mut table = write_txn
                .open_table(STRINGS_TABLE)
                .map_err(StoreError::backend)?;
            let exists = table.get(key).map_err(StoreError::backend)?.is_some();
            if !exists {
                table.insert(key, value).map_err(StoreError::backend)?;
            }
            !exists
        };

        if inserted {
            write_txn.commit().map_err(StoreError::backend)?;
        } else {
            write_txn.abort().map_err(StoreError::backend)?;
        }
        Ok(inserted)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let read_txn = self.db.begin_read().map_err(StoreError::backend)?;
        let table = read_txn
            .open_table(STRINGS_TABLE)
            .map_err(StoreError::backend)?;

        Ok(table
            .get(key)
            .map_err(StoreError::backend)?
            .map(|value| value.value().to_vec()))
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write().map_err(StoreError::backend)?;

        let removed = {
            let mut table = write_txn
                .open_table(STRINGS_TABLE)
                .map_err(StoreError::backend)?;
            let removed = table.remove(key).map_err(StoreError::backend)?.is_some();
            removed
        };

        write_txn.commit().map_err(StoreError::backend)?;
        Ok(removed)
    }

    fn scan(
        &self,
        visitor: &mut dyn FnMut(&[u8]) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let read_txn = self.db.begin_read().map_err(StoreError::backend)?;
        let table = read_txn
            .open_table(STRINGS_TABLE)
            .map_err(StoreError::backend)?;

        for item in table.iter().map_err(StoreError::backend)? {
            let (_, value) = item.map_err(StoreError::backend)?;
            visitor(value.value())?;
        }

        Ok(())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let read_txn = self.db.begin_read().map_err(StoreError::backend)?;
        let table = read_txn
            .open_table(STRINGS_TABLE)
            .map_err(StoreError::backend)?;
        let len = table.len().map_err(StoreError::backend)?;
        Ok(len as usize)
    }
}
