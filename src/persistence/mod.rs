//! Document store for the `products` and `orders` collections
//!
//! [`Store`] is built once at startup from [`StoreConfig`] and handed to the
//! services; nothing in the crate reaches for a global connection.

pub mod memory;
pub mod mongo;
pub mod repository;
pub mod schema;

use std::sync::Arc;

use anyhow::Result;

use crate::config::{StoreBackend, StoreConfig};

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use repository::{HealthProbe, OrderRepository, ProductRepository};

/// Handles to one backend, viewed through each repository trait
#[derive(Clone)]
pub struct Store {
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub health: Arc<dyn HealthProbe>,
}

impl Store {
    pub fn from_backend<B>(backend: B) -> Self
    where
        B: ProductRepository + OrderRepository + HealthProbe + 'static,
    {
        let backend = Arc::new(backend);
        Self {
            products: backend.clone(),
            orders: backend.clone(),
            health: backend,
        }
    }

    /// Fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::from_backend(MemoryStore::new())
    }

    /// Open the backend selected in config
    pub async fn open(config: &StoreConfig) -> Result<Self> {
        match config.backend {
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store, data is lost on exit");
                Ok(Self::in_memory())
            }
            StoreBackend::Mongo => {
                let mongo = MongoStore::connect(&config.uri, &config.database).await?;
                mongo.init_schema().await?;
                Ok(Self::from_backend(mongo))
            }
        }
    }
}
