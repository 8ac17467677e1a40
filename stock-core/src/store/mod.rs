//! In-memory stores owned by the stock manager
//!
//! The catalog store exclusively owns `Product` records and the ledger
//! store exclusively owns `StockMovement` records. Neither is reachable
//! for mutation except through [`crate::manager::StockManager`], which
//! keeps both behind one lock.

pub mod catalog;
pub mod ledger;

pub use catalog::CatalogStore;
pub use ledger::LedgerStore;
