//! redb-based snapshot persistence for the catalog and the movement ledger
//!
//! # Layout
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `snapshots` | `"products"` | JSON envelope of `Product` records | Catalog snapshot |
//! | `snapshots` | `"movements"` | JSON envelope of `StockMovement` records | Ledger snapshot (newest-first) |
//!
//! Every save is a full overwrite of both keys in one write transaction
//! (last-writer-wins; there is exactly one writer). Values carry a
//! `schemaVersion` field; legacy bare-array payloads from the original
//! installation are still accepted on load.
//!
//! # Durability
//!
//! redb uses `Durability::Immediate` by default: commits are persistent
//! as soon as `commit()` returns, and the database file is always in a
//! consistent state after power loss.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::models::{Product, StockMovement};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Single snapshot table: key = snapshot name, value = JSON bytes
const SNAPSHOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("snapshots");

const PRODUCTS_KEY: &str = "products";
const MOVEMENTS_KEY: &str = "movements";

/// Current snapshot schema version
const SCHEMA_VERSION: u32 = 1;

/// Snapshot envelope persisted under each key
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotEnvelope<T> {
    schema_version: u32,
    records: Vec<T>,
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
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

pub type StorageResult<T> = Result<T, StorageError>;

/// In-memory state loaded from the two snapshots
#[derive(Debug, Clone)]
pub struct PersistedState {
    pub products: Vec<Product>,
    pub movements: Vec<StockMovement>,
}

/// Snapshot store backed by redb
#[derive(Clone)]
pub struct SnapshotStore {
    db: Arc<Database>,
}

impl SnapshotStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the table so first load never hits a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SNAPSHOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SNAPSHOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load both snapshots.
    ///
    /// An absent products snapshot yields the fixed seed catalog; an
    /// absent movements snapshot yields an empty ledger. A snapshot that
    /// is present but fails to parse is logged and treated as absent -
    /// corruption must never crash startup.
    pub fn load(&self) -> StorageResult<PersistedState> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SNAPSHOTS_TABLE)?;

        let products = match table.get(PRODUCTS_KEY)? {
            Some(value) => decode_records(PRODUCTS_KEY, value.value())
                .unwrap_or_else(crate::seed::seed_products),
            None => crate::seed::seed_products(),
        };

        let movements = match table.get(MOVEMENTS_KEY)? {
            Some(value) => decode_records(MOVEMENTS_KEY, value.value()).unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(PersistedState {
            products,
            movements,
        })
    }

    /// Persist both snapshots as a full overwrite in one transaction
    pub fn save(&self, products: &[Product], movements: &[StockMovement]) -> StorageResult<()> {
        let products_value = serde_json::to_vec(&SnapshotEnvelope {
            schema_version: SCHEMA_VERSION,
            records: products.to_vec(),
        })?;
        let movements_value = serde_json::to_vec(&SnapshotEnvelope {
            schema_version: SCHEMA_VERSION,
            records: movements.to_vec(),
        })?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SNAPSHOTS_TABLE)?;
            table.insert(PRODUCTS_KEY, products_value.as_slice())?;
            table.insert(MOVEMENTS_KEY, movements_value.as_slice())?;
        }
        write_txn.commit()?;

        tracing::debug!(
            products = products.len(),
            movements = movements.len(),
            "Snapshots persisted"
        );
        Ok(())
    }
}

/// Decode a snapshot value, falling back through the legacy bare-array
/// format before giving up. Returns `None` when the bytes are corrupt.
fn decode_records<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Option<Vec<T>> {
    match serde_json::from_slice::<SnapshotEnvelope<T>>(bytes) {
        Ok(envelope) => {
            if envelope.schema_version != SCHEMA_VERSION {
                tracing::warn!(
                    key,
                    found = envelope.schema_version,
                    expected = SCHEMA_VERSION,
                    "Snapshot schema version mismatch, loading as-is"
                );
            }
            Some(envelope.records)
        }
        // Pre-versioning installations stored a bare JSON array;
        // upgraded to the envelope on the next save.
        Err(_) => match serde_json::from_slice::<Vec<T>>(bytes) {
            Ok(records) => {
                tracing::info!(key, "Loaded legacy snapshot without schema version");
                Some(records)
            }
            Err(e) => {
                tracing::error!(key, error = %e, "Corrupt snapshot, falling back to defaults");
                None
            }
        },
    }
}
