//! Order and catalog request types
//!
//! - `CreateOrderRequest`: body of `POST /orders`
//! - `Pagination`: `limit` / `offset` query of `GET /orders`
//! - `QuantityQuery`: `quantity` query of `PUT /products/{product_id}`

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Item, UserAddress};

/// Page size used when `limit` is omitted
pub const DEFAULT_LIMIT: u64 = 10;

/// Order submission
///
/// `orderId` and `timestamp` are accepted for compatibility with clients that
/// echo a full order back, but the server always assigns its own.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Ignored
    pub order_id: Option<String>,
    /// Ignored
    pub timestamp: Option<DateTime<Utc>>,
    #[validate(nested)]
    pub items: Vec<Item>,
    #[validate(nested)]
    pub user_address: UserAddress,
}

/// Offset pagination. Negative values fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Maximum number of orders to return
    #[serde(default = "default_limit")]
    #[param(default = 10, minimum = 0)]
    pub limit: u64,
    /// Number of orders to skip
    #[serde(default)]
    #[param(default = 0, minimum = 0)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// New stock level
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuantityQuery {
    pub quantity: i64,
}
