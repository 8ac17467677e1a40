//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed product category set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Bulbs,
    Switches,
    Wires,
    Alternators,
    Starters,
    Batteries,
    Fuses,
    Relays,
    Horns,
    Accessories,
}

/// Fixed stock unit set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StockUnit {
    Pcs,
    Meters,
    Sets,
    Rolls,
}

/// Product entity
///
/// `current_stock` is a derived cache of the movement ledger, maintained
/// by the engine; no other code path may write it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, stable for the product's lifetime
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub brand: String,
    pub unit: StockUnit,
    /// Intended-unique secondary key; uniqueness is not enforced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Whole currency units
    pub cost_price: i64,
    pub selling_price: i64,
    /// Derived stock level, never negative
    pub current_stock: u32,
    /// Alert threshold only, not a hard limit
    pub min_stock: u32,
    /// Last mutation to this record, including stock mutations
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether stock has fallen to or below the alert threshold
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock
    }
}
