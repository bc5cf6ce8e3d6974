//! Order Service - Business logic for order operations
//!
//! Orders are accepted as submitted: no catalog lookup, no total check and
//! no stock reservation. The service owns only id and timestamp assignment.

use std::sync::Arc;

use chrono::Utc;
use ulid::Ulid;

use super::ServiceError;
use crate::gateway::types::{CreateOrderRequest, Pagination};
use crate::models::Order;
use crate::persistence::OrderRepository;

pub const ORDER_NOT_FOUND: &str = "Order not found";

/// Order id generator
pub type OrderIdGen = Box<dyn Fn() -> String + Send + Sync>;

/// Default generator: a ULID, unique and sortable by creation time
pub fn ulid_order_id() -> String {
    Ulid::new().to_string()
}

/// Order Service - handles all order-related business logic
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    next_order_id: OrderIdGen,
}

impl OrderService {
    /// Create a new OrderService that issues ULID order ids
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self::with_id_generator(orders, ulid_order_id)
    }

    pub fn with_id_generator(
        orders: Arc<dyn OrderRepository>,
        next_order_id: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            orders,
            next_order_id: Box::new(next_order_id),
        }
    }

    /// Create a new order
    ///
    /// Any `orderId` / `timestamp` on the request is discarded.
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, ServiceError> {
        let order = Order {
            order_id: (self.next_order_id)(),
            timestamp: Utc::now(),
            items: req.items,
            user_address: req.user_address,
        };

        self.orders.insert_order(&order).await?;
        tracing::info!(
            order_id = %order.order_id,
            items = order.items.len(),
            "Order created"
        );
        Ok(order)
    }

    /// Page through orders in store order
    pub async fn list_orders(&self, page: Pagination) -> Result<Vec<Order>, ServiceError> {
        let orders = self.orders.list_orders(page.offset, page.limit).await?;
        tracing::debug!(
            offset = page.offset,
            limit = page.limit,
            returned = orders.len(),
            "Listed orders"
        );
        Ok(orders)
    }

    pub async fn get_order(&self, order_id: &str) -> Result<Order, ServiceError> {
        self.orders
            .get_order(order_id)
            .await?
            .ok_or(ServiceError::NotFound(ORDER_NOT_FOUND))
    }
}
