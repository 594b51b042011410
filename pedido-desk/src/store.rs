//! redb-based storage for saved orders
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `"pedidos"` | `Vec<OrderRecord>` as JSON | The whole saved-order collection |
//!
//! The collection is small (one user, tens of orders), so the entire
//! vector is read at open and rewritten in a single committed
//! transaction on every mutation. Insertion order is the listing order.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once `commit()` returns
//! the collection is on disk in a consistent state, safe against the
//! desktop being switched off mid-save.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::{OrderRecord, OrderSummary};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Single-table layout: key = collection name, value = JSON-serialized Vec<OrderRecord>
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

const COLLECTION_KEY: &str = "pedidos";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Saved-order store backed by redb
///
/// Keeps the collection mirrored in memory. Mutations update the mirror
/// first and then persist; a failed persist is reported but the mirror
/// keeps the attempted change, so the draft the user sees is never
/// rolled back under them.
pub struct OrderStore {
    db: Arc<Database>,
    records: Vec<OrderRecord>,
}

impl OrderStore {
    /// Open or create the database at the given path and read the
    /// collection into memory.
    ///
    /// A payload that no longer deserializes is logged and treated as an
    /// empty collection; opening never fails the session over old data.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
        }
        write_txn.commit()?;

        let records = Self::read_collection(&db)?;
        Ok(Self {
            db: Arc::new(db),
            records,
        })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(db),
            records: Vec::new(),
        })
    }

    fn read_collection(db: &Database) -> StoreResult<Vec<OrderRecord>> {
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;

        let Some(guard) = table.get(COLLECTION_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice(guard.value()) {
            Ok(records) => Ok(records),
            Err(err) => {
                tracing::warn!(error = %err, "stored order collection is corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Save the record, assigning an ID on first save.
    ///
    /// A record that already carries an ID replaces its stored entry in
    /// place; an ID the collection does not know is re-appended as-is.
    /// Returns the record's ID.
    pub fn save(&mut self, record: &mut OrderRecord) -> StoreResult<String> {
        let id = match &record.id {
            Some(id) => id.clone(),
            None => {
                let id = shared::util::order_id();
                record.id = Some(id.clone());
                id
            }
        };

        match self
            .records
            .iter_mut()
            .find(|r| r.id.as_deref() == Some(id.as_str()))
        {
            Some(stored) => *stored = record.clone(),
            None => self.records.push(record.clone()),
        }

        self.persist()?;
        tracing::debug!(id = %id, "order saved");
        Ok(id)
    }

    /// Remove the record with the given ID. Unknown IDs are a no-op.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id.as_deref() != Some(id));

        if self.records.len() != before {
            self.persist()?;
            tracing::debug!(id = %id, "order deleted");
        }
        Ok(())
    }

    /// Fetch a stored record, ID included.
    pub fn load(&self, id: &str) -> Option<OrderRecord> {
        self.records
            .iter()
            .find(|r| r.id.as_deref() == Some(id))
            .cloned()
    }

    /// Listing rows in insertion order.
    pub fn list(&self) -> Vec<OrderSummary> {
        self.records
            .iter()
            .filter_map(|r| {
                r.id.as_ref().map(|id| OrderSummary {
                    id: id.clone(),
                    client_name: r.client_name.clone(),
                    date: r.date.clone(),
                })
            })
            .collect()
    }

    /// Number of saved orders.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rewrite the whole collection under the fixed key.
    fn persist(&self) -> StoreResult<()> {
        let payload = serde_json::to_vec(&self.records)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(ORDERS_TABLE)?;
            table.insert(COLLECTION_KEY, payload.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
