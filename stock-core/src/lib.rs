//! Inventory ledger core
//!
//! Tracks a shop's product catalog and the ordered history of
//! stock-movement events, keeping each product's derived stock level
//! consistent with that history.
//!
//! Architecture:
//! - [`store::CatalogStore`] owns the products
//! - [`store::LedgerStore`] owns the movement history
//! - [`manager::StockManager`] coordinates both stores atomically and
//!   is the only mutation path
//! - [`storage::SnapshotStore`] persists both as full-overwrite
//!   snapshots in redb after every state change

pub mod config;
pub mod manager;
pub mod seed;
pub mod storage;
pub mod store;

pub use config::Config;
pub use manager::{ManagerError, ManagerResult, StockManager};
pub use storage::{PersistedState, SnapshotStore, StorageError, StorageResult};
pub use store::{CatalogStore, LedgerStore};
