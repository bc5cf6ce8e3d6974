use anyhow::{Context, Result};
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::models::{Order, Product};

/// Unique indexes on the caller-visible keys.
///
/// `createIndexes` is idempotent, so this runs on every startup.
pub async fn init_schema(products: &Collection<Product>, orders: &Collection<Order>) -> Result<()> {
    tracing::info!("Initializing MongoDB indexes...");

    products
        .create_index(unique_index("productId"))
        .await
        .context("Failed to create products.productId index")?;

    orders
        .create_index(unique_index("orderId"))
        .await
        .context("Failed to create orders.orderId index")?;

    tracing::info!("MongoDB indexes ready");
    Ok(())
}

fn unique_index(field: &str) -> IndexModel {
    IndexModel::builder()
        .keys(doc! { field: 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build()
}
