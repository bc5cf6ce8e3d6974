//! Catalog Service - product listing, stock overwrite, startup seeding

use std::sync::Arc;

use super::ServiceError;
use crate::models::{Product, ProductId};
use crate::money::Amount;
use crate::persistence::ProductRepository;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Products inserted into an empty catalog at startup
pub fn starter_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "TV", Amount::from_scaled(49999, 2), 10),
        Product::new(2, "Laptop", Amount::from_scaled(89999, 2), 5),
        Product::new(3, "Smartphone", Amount::from_scaled(29999, 2), 20),
    ]
}

#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        let products = self.products.list_products().await?;
        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Overwrite the stock level of one product.
    ///
    /// The quantity is stored as given, negative values included. An unknown
    /// id and an unchanged quantity both report `NotFound`.
    pub async fn update_product_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), ServiceError> {
        let modified = self.products.set_quantity(product_id, quantity).await?;
        if modified != 1 {
            tracing::info!(product_id, quantity, "Quantity update modified no product");
            return Err(ServiceError::NotFound(PRODUCT_NOT_FOUND));
        }
        tracing::info!(product_id, quantity, "Product quantity updated");
        Ok(())
    }

    /// Insert `seed` when the catalog is empty. Returns how many were inserted.
    pub async fn seed_catalog(&self, seed: &[Product]) -> Result<usize, ServiceError> {
        let existing = self.products.count_products().await?;
        if existing > 0 {
            tracing::info!(existing, "Catalog already populated, skipping seed");
            return Ok(0);
        }
        self.products.insert_products(seed).await?;
        tracing::info!(inserted = seed.len(), "Seeded catalog");
        Ok(seed.len())
    }
}
