use std::sync::Arc;

use crate::persistence::{HealthProbe, Store};

use super::services::{CatalogService, OrderService};

/// Gateway 应用状态 (共享)
pub struct AppState {
    /// Product listing and stock updates
    pub catalog: CatalogService,
    /// Order placement and lookup
    pub orders: OrderService,
    /// Store liveness probe for GET /health
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    pub fn new(store: &Store) -> Self {
        Self {
            catalog: CatalogService::new(store.products.clone()),
            orders: OrderService::new(store.orders.clone()),
            health: store.health.clone(),
        }
    }

    /// Swap in a different order service (e.g. deterministic ids in tests)
    pub fn with_order_service(mut self, orders: OrderService) -> Self {
        self.orders = orders;
        self
    }
}
