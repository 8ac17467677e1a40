//! Data models
//!
//! Shared between the ledger core and frontends (via API).
//! Serialized field names match the persisted snapshot format (camelCase).

pub mod movement;
pub mod product;

// Re-exports
pub use movement::*;
pub use product::*;
