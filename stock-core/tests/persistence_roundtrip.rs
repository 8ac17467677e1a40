//! On-disk persistence tests: state must survive a full close/reopen
//! cycle with ordering intact.

use chrono::Utc;
use shared::models::{Actor, MovementKind, Product, ProductCategory, StockUnit};
use stock_core::StockManager;

fn actor() -> Actor {
    Actor {
        id: "system".to_string(),
        name: "Shop Manager".to_string(),
    }
}

fn new_product(id: &str, name: &str, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: ProductCategory::Wires,
        brand: "Finolex".to_string(),
        unit: StockUnit::Meters,
        barcode: Some(format!("WIRE-{id}")),
        cost_price: 40,
        selling_price: 60,
        current_stock: stock,
        min_stock: 50,
        updated_at: Utc::now(),
    }
}

#[test]
fn state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("stock.redb");

    let (expected_products, expected_movements) = {
        let manager = StockManager::open(&db_path).unwrap();
        manager
            .save_product(new_product("w-1", "2.5mm Copper Wire", 200))
            .unwrap();
        manager
            .record_movement("w-1", MovementKind::Sell, 25, &actor(), None)
            .unwrap();
        manager
            .record_movement("1", MovementKind::Add, 10, &actor(), Some("restock".into()))
            .unwrap();
        manager.delete_product("2").unwrap();
        (manager.products(), manager.movements())
    };

    let reopened = StockManager::open(&db_path).unwrap();
    let products = reopened.products();
    let movements = reopened.movements();

    assert_eq!(products.len(), expected_products.len());
    for (got, want) in products.iter().zip(&expected_products) {
        assert_eq!(got.id, want.id);
        assert_eq!(got.current_stock, want.current_stock);
        assert_eq!(got.updated_at, want.updated_at);
    }

    assert_eq!(movements.len(), expected_movements.len());
    for (got, want) in movements.iter().zip(&expected_movements) {
        assert_eq!(got.id, want.id);
        assert_eq!(got.quantity, want.quantity);
        assert_eq!(got.timestamp, want.timestamp);
    }

    // the new product sits at the head, the deleted seed product is gone
    assert_eq!(products[0].id, "w-1");
    assert_eq!(products[0].current_stock, 175);
    assert!(!products.iter().any(|p| p.id == "2"));
}

#[test]
fn fresh_database_starts_from_seed_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let manager = StockManager::open(dir.path().join("stock.redb")).unwrap();

    let products = manager.products();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].name, "H4 Headlight Bulb");
    assert!(manager.movements().is_empty());
}

#[test]
fn cascade_delete_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("stock.redb");

    {
        let manager = StockManager::open(&db_path).unwrap();
        manager
            .record_movement("3", MovementKind::Add, 8, &actor(), None)
            .unwrap();
        manager
            .record_movement("1", MovementKind::Sell, 5, &actor(), None)
            .unwrap();
        manager.delete_product("3").unwrap();
    }

    let reopened = StockManager::open(&db_path).unwrap();
    assert!(reopened.get_product("3").is_none());
    let movements = reopened.movements();
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0].product_id, "1");
}
