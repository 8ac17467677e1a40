//! Shared types for the stock ledger
//!
//! Data models used by the ledger core and by the presentation layer
//! (via its API). All wire formats are camelCase JSON with ISO-8601
//! timestamps.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
