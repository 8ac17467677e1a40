//! Fixed seed catalog
//!
//! Used when no products snapshot exists yet (first start or fallback
//! after a corrupt snapshot).

use chrono::Utc;
use shared::models::{Product, ProductCategory, StockUnit};

/// The initial catalog a fresh installation starts with
pub fn seed_products() -> Vec<Product> {
    let now = Utc::now();
    vec![
        Product {
            id: "1".to_string(),
            name: "H4 Headlight Bulb".to_string(),
            category: ProductCategory::Bulbs,
            brand: "Philips".to_string(),
            unit: StockUnit::Pcs,
            barcode: None,
            cost_price: 450,
            selling_price: 650,
            current_stock: 45,
            min_stock: 10,
            updated_at: now,
        },
        Product {
            id: "2".to_string(),
            name: "12V 70Ah Battery".to_string(),
            category: ProductCategory::Batteries,
            brand: "Exide".to_string(),
            unit: StockUnit::Pcs,
            barcode: None,
            cost_price: 8500,
            selling_price: 11000,
            current_stock: 4,
            min_stock: 5,
            updated_at: now,
        },
        Product {
            id: "3".to_string(),
            name: "Auto Relays 5-Pin".to_string(),
            category: ProductCategory::Relays,
            brand: "Bosch".to_string(),
            unit: StockUnit::Pcs,
            barcode: None,
            cost_price: 120,
            selling_price: 250,
            current_stock: 12,
            min_stock: 20,
            updated_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_shape() {
        let products = seed_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, "1");
        assert_eq!(products[0].current_stock, 45);
        // battery starts below its alert threshold
        assert!(products[1].is_low_stock());
    }
}
