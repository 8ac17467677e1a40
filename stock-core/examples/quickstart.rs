//! Minimal end-to-end walkthrough: open the ledger, record a couple of
//! movements, print the resulting state.
//!
//! ```bash
//! STOCK_DATA_DIR=/tmp/stock-demo cargo run --example quickstart
//! ```

use shared::models::{Actor, MovementKind};
use stock_core::{Config, StockManager};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.data_dir)?;
    let manager = StockManager::open(config.db_path())?;

    let actor = Actor {
        id: "system".to_string(),
        name: "Shop Manager".to_string(),
    };

    println!("Catalog:");
    for product in manager.products() {
        println!(
            "  [{}] {} ({}) stock={} min={}{}",
            product.id,
            product.name,
            product.brand,
            product.current_stock,
            product.min_stock,
            if product.is_low_stock() { "  LOW" } else { "" }
        );
    }

    let first = manager
        .products()
        .first()
        .cloned()
        .expect("seed catalog is never empty");

    let movement = manager.record_movement(
        &first.id,
        MovementKind::Add,
        5,
        &actor,
        Some("quickstart restock".to_string()),
    )?;
    println!(
        "\nRecorded {} x{} for {} -> stock is now {}",
        movement.kind,
        movement.quantity,
        movement.product_name,
        manager.get_product(&first.id).map(|p| p.current_stock).unwrap_or(0)
    );

    println!("\nLedger (newest first):");
    for m in manager.movements().iter().take(5) {
        println!(
            "  {} {} x{} by {} at {}",
            m.product_name, m.kind, m.quantity, m.actor_name, m.timestamp
        );
    }

    Ok(())
}
