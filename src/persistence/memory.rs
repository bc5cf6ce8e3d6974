//! In-memory document store
//!
//! Keeps each collection in insertion order, which stands in for the
//! "store-native order" of a real document store. Used by tests and by the
//! `memory` backend for local runs without MongoDB.

use anyhow::{Result, bail};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repository::{HealthProbe, OrderRepository, ProductRepository};
use crate::models::{Order, Product, ProductId};

#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
    orders: RwLock<Vec<Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn count_products(&self) -> Result<u64> {
        Ok(self.products.read().await.len() as u64)
    }

    async fn insert_products(&self, products: &[Product]) -> Result<()> {
        let mut stored = self.products.write().await;
        for p in products {
            if stored.iter().any(|s| s.product_id == p.product_id) {
                bail!("duplicate key: productId {}", p.product_id);
            }
        }
        stored.extend_from_slice(products);
        Ok(())
    }

    async fn set_quantity(&self, product_id: ProductId, quantity: i64) -> Result<u64> {
        let mut stored = self.products.write().await;
        match stored.iter_mut().find(|p| p.product_id == product_id) {
            Some(p) if p.quantity != quantity => {
                p.quantity = quantity;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn insert_order(&self, order: &Order) -> Result<()> {
        let mut stored = self.orders.write().await;
        if stored.iter().any(|o| o.order_id == order.order_id) {
            bail!("duplicate key: orderId {}", order.order_id);
        }
        stored.push(order.clone());
        Ok(())
    }

    async fn get_order(&self, order_id: &str) -> Result<Option<Order>> {
        let stored = self.orders.read().await;
        Ok(stored.iter().find(|o| o.order_id == order_id).cloned())
    }

    async fn list_orders(&self, offset: u64, limit: u64) -> Result<Vec<Order>> {
        let stored = self.orders.read().await;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(stored.iter().skip(offset).take(limit).cloned().collect())
    }
}

#[async_trait]
impl HealthProbe for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, UserAddress};
    use crate::money::Amount;
    use chrono::Utc;

    fn order(id: &str) -> Order {
        Order {
            order_id: id.to_string(),
            timestamp: Utc::now(),
            items: vec![Item {
                product_id: 1,
                bought_quantity: 1,
                total_amount: Amount::parse("499.99").unwrap(),
            }],
            user_address: UserAddress {
                city: "Lyon".into(),
                country: "France".into(),
                zip_code: "69001".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_orders_page_in_insertion_order() {
        let store = MemoryStore::new();
        for id in ["a", "b", "c"] {
            store.insert_order(&order(id)).await.unwrap();
        }

        let page = store.list_orders(1, 10).await.unwrap();
        let ids: Vec<_> = page.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);

        assert_eq!(store.list_orders(0, 1).await.unwrap().len(), 1);
        assert!(store.list_orders(3, 10).await.unwrap().is_empty());
        assert!(store.list_orders(u64::MAX, u64::MAX).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_order_id_rejected() {
        let store = MemoryStore::new();
        store.insert_order(&order("dup")).await.unwrap();
        assert!(store.insert_order(&order("dup")).await.is_err());
        assert_eq!(store.list_orders(0, 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_quantity_reports_modifications() {
        let store = MemoryStore::new();
        let tv = Product::new(1, "TV", Amount::parse("499.99").unwrap(), 10);
        store.insert_products(&[tv]).await.unwrap();

        assert_eq!(store.set_quantity(1, 3).await.unwrap(), 1);
        // Same value again modifies nothing
        assert_eq!(store.set_quantity(1, 3).await.unwrap(), 0);
        assert_eq!(store.set_quantity(42, 3).await.unwrap(), 0);
        assert_eq!(store.list_products().await.unwrap()[0].quantity, 3);
    }
}
