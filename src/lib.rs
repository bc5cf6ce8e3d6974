//! Storefront - product catalog and order service
//!
//! An HTTP JSON API over a document store.
//!
//! # Modules
//!
//! - [`money`] - Non-negative decimal amounts
//! - [`models`] - Product, Item, UserAddress and Order documents
//! - [`persistence`] - Repository traits plus MongoDB and in-memory backends
//! - [`gateway`] - Axum router, handlers, services and OpenAPI docs
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod money;
pub mod persistence;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use gateway::state::AppState;
pub use models::{Item, Order, Product, ProductId, UserAddress};
pub use money::{Amount, MoneyError};
pub use persistence::Store;
