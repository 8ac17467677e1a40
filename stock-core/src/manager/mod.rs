//! StockManager - the stock mutation engine
//!
//! The only mutation path into the catalog and the ledger. Each
//! operation runs to completion under one write lock, so no observer
//! can see an appended movement without its stock update or vice versa.
//!
//! # Operation Flow
//!
//! ```text
//! record_movement(product_id, kind, quantity, actor, note)
//!     ├─ 1. Validate quantity (> 0)
//!     ├─ 2. Take the write lock
//!     ├─ 3. Resolve the product (explicit NotFound otherwise)
//!     ├─ 4. Apply the movement to current_stock (floor at zero)
//!     ├─ 5. Append the movement snapshot to the ledger
//!     ├─ 6. Persist both snapshots (best-effort, logged on failure)
//!     └─ 7. Return the recorded movement
//! ```

mod error;
pub use error::*;

use crate::storage::SnapshotStore;
use crate::store::{CatalogStore, LedgerStore};
use chrono::Utc;
use parking_lot::RwLock;
use shared::models::{Actor, MovementKind, Product, StockMovement};
use std::path::Path;

/// Both stores behind one lock; the single-lock discipline is what
/// makes the mutation-plus-append unit atomic to observers.
struct StoreState {
    catalog: CatalogStore,
    ledger: LedgerStore,
}

/// Stock mutation engine
///
/// Holds no persistent state of its own - it coordinates the catalog
/// and ledger stores and keeps the snapshot store current.
pub struct StockManager {
    state: RwLock<StoreState>,
    storage: SnapshotStore,
}

impl std::fmt::Debug for StockManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("StockManager")
            .field("products", &state.catalog.len())
            .field("movements", &state.ledger.len())
            .finish()
    }
}

impl StockManager {
    /// Open the snapshot database at the given path and seed both
    /// stores from it.
    pub fn open(db_path: impl AsRef<Path>) -> ManagerResult<Self> {
        let storage = SnapshotStore::open(db_path)?;
        Self::with_storage(storage)
    }

    /// Create a manager over an existing snapshot store
    pub fn with_storage(storage: SnapshotStore) -> ManagerResult<Self> {
        let persisted = storage.load()?;
        tracing::info!(
            products = persisted.products.len(),
            movements = persisted.movements.len(),
            "📦 Stock manager seeded from snapshots"
        );
        Ok(Self {
            state: RwLock::new(StoreState {
                catalog: CatalogStore::from_records(persisted.products),
                ledger: LedgerStore::from_records(persisted.movements),
            }),
            storage,
        })
    }

    // ========== Mutations ==========

    /// Record a stock movement: mutate the product's derived stock and
    /// append the ledger event as one unit.
    ///
    /// Selling more than the available stock is not an error - the
    /// stock floors at zero while the movement records the requested
    /// quantity.
    pub fn record_movement(
        &self,
        product_id: &str,
        kind: MovementKind,
        quantity: u32,
        actor: &Actor,
        note: Option<String>,
    ) -> ManagerResult<StockMovement> {
        if quantity == 0 {
            return Err(ManagerError::InvalidQuantity(quantity));
        }

        let mut state = self.state.write();
        let (movement, new_stock) = {
            let product = state
                .catalog
                .get_mut(product_id)
                .ok_or_else(|| ManagerError::ProductNotFound(product_id.to_string()))?;

            let new_stock = match kind {
                MovementKind::Add => product.current_stock.saturating_add(quantity),
                MovementKind::Sell => product.current_stock.saturating_sub(quantity),
            };
            product.current_stock = new_stock;
            product.updated_at = Utc::now();

            (
                StockMovement::new(product, kind, quantity, actor, note),
                new_stock,
            )
        };
        state.ledger.append(movement.clone());
        self.persist(&state);

        tracing::info!(
            product_id,
            kind = %kind,
            quantity,
            new_stock,
            actor_id = %actor.id,
            "Stock movement recorded"
        );
        Ok(movement)
    }

    /// Insert a new product or replace the fields of an existing one,
    /// then persist. Never touches the ledger.
    ///
    /// For an existing id the incoming `current_stock` is ignored and
    /// the stored value kept: stock changes only go through
    /// [`Self::record_movement`]. A new product takes its stock from
    /// the input, since it has no ledger history yet.
    pub fn save_product(&self, mut product: Product) -> ManagerResult<()> {
        let mut state = self.state.write();
        if let Some(existing) = state.catalog.get(&product.id) {
            product.current_stock = existing.current_stock;
        }
        product.updated_at = Utc::now();

        let product_id = product.id.clone();
        let inserted = state.catalog.upsert(product);
        self.persist(&state);

        tracing::info!(product_id = %product_id, inserted, "Product saved");
        Ok(())
    }

    /// Delete a product and cascade-remove every movement referencing
    /// it, as one unit, then persist. Returns the removed movements.
    pub fn delete_product(&self, product_id: &str) -> ManagerResult<Vec<StockMovement>> {
        let mut state = self.state.write();
        let product = state
            .catalog
            .remove(product_id)
            .ok_or_else(|| ManagerError::ProductNotFound(product_id.to_string()))?;
        let removed = state.ledger.remove_by_product(product_id);
        self.persist(&state);

        tracing::info!(
            product_id,
            name = %product.name,
            cascaded = removed.len(),
            "Product deleted with cascading movements"
        );
        Ok(removed)
    }

    /// Persist both snapshots. Failure is degraded durability, not a
    /// transaction failure: the in-memory state stays authoritative
    /// until the next successful save.
    fn persist(&self, state: &StoreState) {
        if let Err(e) = self.storage.save(state.catalog.list(), state.ledger.list()) {
            tracing::error!(error = %e, "Snapshot save failed, running with degraded durability");
        }
    }

    // ========== Public Query Methods ==========

    /// All products, insertion order with newest first
    pub fn products(&self) -> Vec<Product> {
        self.state.read().catalog.list().to_vec()
    }

    pub fn get_product(&self, product_id: &str) -> Option<Product> {
        self.state.read().catalog.get(product_id).cloned()
    }

    /// Barcode lookup for the code-recognition collaborator
    pub fn find_by_barcode(&self, code: &str) -> Option<Product> {
        self.state.read().catalog.find_by_barcode(code).cloned()
    }

    /// The full movement history, newest first
    pub fn movements(&self) -> Vec<StockMovement> {
        self.state.read().ledger.list().to_vec()
    }

    pub fn movements_for_product(&self, product_id: &str) -> Vec<StockMovement> {
        self.state
            .read()
            .ledger
            .for_product(product_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Replay the surviving ledger events for a product (oldest first,
    /// floored at zero) from its stock-establishing baseline. Used to
    /// verify that `current_stock` never diverges from the ledger.
    pub fn rebuild_stock(&self, product_id: &str, initial_stock: u32) -> ManagerResult<u32> {
        let state = self.state.read();
        if state.catalog.get(product_id).is_none() {
            return Err(ManagerError::ProductNotFound(product_id.to_string()));
        }

        let mut stock = initial_stock;
        // ledger is newest-first; replay in event order
        for movement in state.ledger.for_product(product_id).into_iter().rev() {
            stock = match movement.kind {
                MovementKind::Add => stock.saturating_add(movement.quantity),
                MovementKind::Sell => stock.saturating_sub(movement.quantity),
            };
        }
        Ok(stock)
    }
}
