//! Catalog and order documents
//!
//! These are the shapes persisted in the `products` and `orders` collections
//! and returned over HTTP. Field names are camelCase in both places.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::money::Amount;

/// Caller-visible product identifier
pub type ProductId = i64;

/// Product document
///
/// `productId` is assigned when the catalog is seeded and is the key used by
/// quantity updates. The store's own `_id` never leaves the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 1)]
    pub product_id: ProductId,
    #[schema(example = "TV")]
    pub name: String,
    #[schema(value_type = f64, example = 499.99)]
    pub price: Amount,
    /// Units in stock. Not validated, may go negative through updates.
    #[schema(example = 10)]
    pub quantity: i64,
}

impl Product {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        price: Amount,
        quantity: i64,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Order line
///
/// `productId` is not checked against the catalog and `totalAmount` is taken
/// as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[schema(example = 1)]
    pub product_id: ProductId,
    #[validate(range(min = 1, message = "must be at least 1"))]
    #[schema(example = 2)]
    pub bought_quantity: i64,
    #[schema(value_type = f64, example = 599.98)]
    pub total_amount: Amount,
}

/// Shipping address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAddress {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "Paris")]
    pub city: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "France")]
    pub country: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(example = "75001")]
    pub zip_code: String,
}

/// Order document. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = "01J9ZQ3V4X8K2M5N7P0R6S1T3W")]
    pub order_id: String,
    pub timestamp: DateTime<Utc>,
    pub items: Vec<Item>,
    pub user_address: UserAddress,
}
