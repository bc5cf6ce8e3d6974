//! Gateway Services Layer
//!
//! Business logic extracted from handlers. Handlers stay thin HTTP adapters
//! that delegate here; services only see the repository traits.

pub mod catalog;
pub mod order;

pub use catalog::{CatalogService, starter_catalog};
pub use order::{OrderIdGen, OrderService, ulid_order_id};

use thiserror::Error;

/// Service error
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Lookup found nothing or update modified nothing. Carries the user-facing message.
    #[error("{0}")]
    NotFound(&'static str),

    /// Any failure from the document store
    #[error("Store error: {0:#}")]
    Store(#[from] anyhow::Error),
}
