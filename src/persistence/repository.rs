//! Repository traits for data access abstraction
//!
//! This module provides traits that abstract the document store, enabling:
//! - Testability through the in-memory implementation
//! - Swapping MongoDB for another backend without touching services
//! - Clean separation between business logic and infrastructure

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Order, Product, ProductId};

// ============================================================================
// Product Repository
// ============================================================================

/// Repository trait for the `products` collection
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in store order
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Number of stored products
    async fn count_products(&self) -> Result<u64>;

    /// Insert products as-is
    async fn insert_products(&self, products: &[Product]) -> Result<()>;

    /// Overwrite `quantity` on the product with this id.
    ///
    /// Returns the number of documents modified (0 or 1). Writing the
    /// current value back modifies nothing.
    async fn set_quantity(&self, product_id: ProductId, quantity: i64) -> Result<u64>;
}

// ============================================================================
// Order Repository
// ============================================================================

/// Repository trait for the `orders` collection
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order
    async fn insert_order(&self, order: &Order) -> Result<()>;

    /// Get a single order by its generated id
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>>;

    /// Page through orders in store order
    async fn list_orders(&self, offset: u64, limit: u64) -> Result<Vec<Order>>;
}

// ============================================================================
// Health
// ============================================================================

/// Liveness check against the backing store
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> Result<()>;
}
