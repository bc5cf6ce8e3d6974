use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};

use super::repository::{HealthProbe, OrderRepository, ProductRepository};
use crate::models::{Order, Product, ProductId};

pub const PRODUCTS_COLLECTION: &str = "products";
pub const ORDERS_COLLECTION: &str = "orders";

/// Projection that keeps the store key out of every read
fn without_store_key() -> Document {
    doc! { "_id": 0 }
}

/// MongoDB stores skip/limit as signed 64-bit; larger values are rejected
fn to_bson_count(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// MongoDB client for the catalog and order collections
pub struct MongoStore {
    db: Database,
    products: Collection<Product>,
    orders: Collection<Order>,
}

impl MongoStore {
    /// Connect to MongoDB and select the database
    ///
    /// # Example URI
    /// ```text
    /// mongodb://localhost:27017/
    /// ```
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .with_context(|| format!("Failed to parse MongoDB URI {}", uri))?;

        let db = client.database(database);
        db.run_command(doc! { "ping": 1 })
            .await
            .with_context(|| format!("Failed to connect to MongoDB at {}", uri))?;

        tracing::info!(uri, database, "Connected to MongoDB");

        Ok(Self {
            products: db.collection(PRODUCTS_COLLECTION),
            orders: db.collection(ORDERS_COLLECTION),
            db,
        })
    }

    /// Create the unique indexes both collections rely on
    pub async fn init_schema(&self) -> Result<()> {
        super::schema::init_schema(&self.products, &self.orders).await
    }
}

#[async_trait]
impl ProductRepository for MongoStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let cursor = self
            .products
            .find(doc! {})
            .projection(without_store_key())
            .await
            .context("Failed to query products")?;
        cursor
            .try_collect()
            .await
            .context("Failed to read products cursor")
    }

    async fn count_products(&self) -> Result<u64> {
        self.products
            .count_documents(doc! {})
            .await
            .context("Failed to count products")
    }

    async fn insert_products(&self, products: &[Product]) -> Result<()> {
        self.products
            .insert_many(products)
            .await
            .context("Failed to insert products")?;
        Ok(())
    }

    async fn set_quantity(&self, product_id: ProductId, quantity: i64) -> Result<u64> {
        let result = self
            .products
            .update_one(
                doc! { "productId": product_id },
                doc! { "$set": { "quantity": quantity } },
            )
            .await
            .with_context(|| format!("Failed to update product {}", product_id))?;
        Ok(result.modified_count)
    }
}

#[async_trait]
impl OrderRepository for MongoStore {
    async fn insert_order(&self, order: &Order) -> Result<()> {
        self.orders
            .insert_one(order)
            .await
            .with_context(|| format!("Failed to insert order {}", order.order_id))?;
        Ok(())
    }

    async fn get_order(&self, order_id: &str) -> Result<Option<Order>> {
        self.orders
            .find_one(doc! { "orderId": order_id })
            .projection(without_store_key())
            .await
            .with_context(|| format!("Failed to query order {}", order_id))
    }

    async fn list_orders(&self, offset: u64, limit: u64) -> Result<Vec<Order>> {
        // limit(0) means "no limit" to MongoDB
        if limit == 0 {
            return Ok(Vec::new());
        }
        let cursor = self
            .orders
            .find(doc! {})
            .projection(without_store_key())
            .skip(to_bson_count(offset).unsigned_abs())
            .limit(to_bson_count(limit))
            .await
            .context("Failed to query orders")?;
        cursor
            .try_collect()
            .await
            .context("Failed to read orders cursor")
    }
}

#[async_trait]
impl HealthProbe for MongoStore {
    async fn ping(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB ping failed")?;
        Ok(())
    }
}
