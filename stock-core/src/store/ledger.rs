//! Ledger store - the ordered movement history
//!
//! Append-only except for cascading deletion when a product is removed.

use shared::models::StockMovement;

/// Movement history in newest-first observable order
#[derive(Debug, Default)]
pub struct LedgerStore {
    movements: Vec<StockMovement>,
}

impl LedgerStore {
    /// Build the store from loaded snapshot records (already newest-first)
    pub fn from_records(movements: Vec<StockMovement>) -> Self {
        Self { movements }
    }

    /// Insert at the head. Quantity/kind validity is the manager's
    /// responsibility before calling this.
    pub fn append(&mut self, movement: StockMovement) {
        self.movements.insert(0, movement);
    }

    /// Remove every movement belonging to a product (cascade); returns
    /// the removed set in their previous relative order.
    pub fn remove_by_product(&mut self, product_id: &str) -> Vec<StockMovement> {
        let (removed, kept) = std::mem::take(&mut self.movements)
            .into_iter()
            .partition(|m| m.product_id == product_id);
        self.movements = kept;
        removed
    }

    pub fn list(&self) -> &[StockMovement] {
        &self.movements
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&StockMovement>
    where
        F: Fn(&StockMovement) -> bool,
    {
        self.movements.iter().filter(|m| predicate(m)).collect()
    }

    /// All movements for one product, newest first
    pub fn for_product(&self, product_id: &str) -> Vec<&StockMovement> {
        self.filter(|m| m.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}
