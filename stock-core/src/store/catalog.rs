//! Catalog store - the product set

use shared::models::Product;

/// Ordered product collection: newest insertions first, existing
/// products keep their position on edit.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Build the store from loaded snapshot records
    pub fn from_records(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Insert a new product at the front, or replace all fields of an
    /// existing one in place. Returns `true` when a new record was
    /// inserted. No barcode uniqueness check is performed; duplicates
    /// are a caller-visible concern, not an error.
    pub fn upsert(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                false
            }
            None => {
                self.products.insert(0, product);
                true
            }
        }
    }

    /// Remove a product; `None` when absent (benign no-op for the store,
    /// escalation is the manager's concern).
    pub fn remove(&mut self, product_id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == product_id)?;
        Some(self.products.remove(index))
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub(crate) fn get_mut(&mut self, product_id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == product_id)
    }

    /// Lookup by the intended-unique barcode; first match wins when
    /// duplicates exist.
    pub fn find_by_barcode(&self, code: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.barcode.as_deref() == Some(code))
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{ProductCategory, StockUnit};

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: ProductCategory::Accessories,
            brand: "Generic".to_string(),
            unit: StockUnit::Pcs,
            barcode: None,
            cost_price: 100,
            selling_price: 150,
            current_stock: 10,
            min_stock: 2,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_prepends_edit_keeps_position() {
        let mut store = CatalogStore::default();
        assert!(store.upsert(product("a", "First")));
        assert!(store.upsert(product("b", "Second")));
        assert_eq!(store.list()[0].id, "b");
        assert_eq!(store.list()[1].id, "a");

        // editing "a" must not move it to the front
        assert!(!store.upsert(product("a", "First Renamed")));
        assert_eq!(store.list()[0].id, "b");
        assert_eq!(store.list()[1].name, "First Renamed");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = CatalogStore::default();
        store.upsert(product("a", "Only"));
        assert!(store.remove("missing").is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove("a").unwrap().id, "a");
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_by_barcode_first_match() {
        let mut store = CatalogStore::default();
        let mut a = product("a", "Tagged");
        a.barcode = Some("123".to_string());
        let mut b = product("b", "Duplicate Tag");
        b.barcode = Some("123".to_string());
        store.upsert(a);
        store.upsert(b);

        // "b" was inserted last and sits at the front
        assert_eq!(store.find_by_barcode("123").unwrap().id, "b");
        assert!(store.find_by_barcode("999").is_none());
    }
}
