//! HTTP handlers
//!
//! Thin adapters: extract, call a service, wrap the result.

pub mod catalog;
pub mod health;
pub mod order;

pub use catalog::{list_products, update_product};
pub use health::{HealthResponse, health_check};
pub use order::{create_order, get_order, list_orders};
