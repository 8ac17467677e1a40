//! Stock movements - immutable ledger events recorded for every add/sell

use super::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Movement kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Add,
    Sell,
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementKind::Add => write!(f, "add"),
            MovementKind::Sell => write!(f, "sell"),
        }
    }
}

/// Acting identity attached to a movement, supplied by the caller
/// (authentication front-end). Opaque to the ledger core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

/// Stock movement - immutable audit record
///
/// Created only as a side effect of a stock-mutation request, destroyed
/// only when its owning product is deleted (cascade). No field is ever
/// edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    /// Movement unique ID
    pub id: String,
    /// Product this movement belongs to
    pub product_id: String,
    /// Product name snapshot at event time (immutable even if the
    /// product is later renamed)
    pub product_name: String,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    /// Strictly positive; validated by the engine before construction
    pub quantity: u32,
    /// Creation time (server clock)
    pub timestamp: DateTime<Utc>,
    /// Actor who triggered this movement
    pub actor_id: String,
    /// Actor name (snapshot for audit)
    pub actor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StockMovement {
    /// Create a new movement, snapshotting the product name and actor
    /// identity at this instant.
    pub fn new(
        product: &Product,
        kind: MovementKind,
        quantity: u32,
        actor: &Actor,
        note: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            kind,
            quantity,
            timestamp: Utc::now(),
            actor_id: actor.id.clone(),
            actor_name: actor.name.clone(),
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProductCategory, StockUnit};

    fn product() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Auto Relays 5-Pin".to_string(),
            category: ProductCategory::Relays,
            brand: "Bosch".to_string(),
            unit: StockUnit::Pcs,
            barcode: None,
            cost_price: 120,
            selling_price: 250,
            current_stock: 12,
            min_stock: 20,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_movement_snapshots_product_and_actor() {
        let actor = Actor {
            id: "emp-7".to_string(),
            name: "Shop Manager".to_string(),
        };
        let m = StockMovement::new(&product(), MovementKind::Sell, 3, &actor, None);
        assert_eq!(m.product_id, "p-1");
        assert_eq!(m.product_name, "Auto Relays 5-Pin");
        assert_eq!(m.actor_id, "emp-7");
        assert_eq!(m.actor_name, "Shop Manager");
        assert!(!m.id.is_empty());
    }

    #[test]
    fn test_kind_serializes_as_type_field() {
        let actor = Actor {
            id: "system".to_string(),
            name: "admin".to_string(),
        };
        let m = StockMovement::new(&product(), MovementKind::Add, 5, &actor, Some("restock".into()));
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["type"], "add");
        assert_eq!(json["productId"], "p-1");
        assert_eq!(json["productName"], "Auto Relays 5-Pin");
        assert_eq!(json["actorId"], "system");
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["note"], "restock");
    }

    #[test]
    fn test_note_omitted_when_absent() {
        let actor = Actor {
            id: "system".to_string(),
            name: "admin".to_string(),
        };
        let m = StockMovement::new(&product(), MovementKind::Sell, 1, &actor, None);
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("note").is_none());
    }
}
