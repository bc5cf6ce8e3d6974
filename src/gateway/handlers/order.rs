//! Order handlers (create, list, get)

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::state::AppState;
use super::super::types::{
    ApiPath, ApiQuery, ApiResult, CreateOrderRequest, ErrorResponse, OrderCreatedResponse,
    Pagination, ValidatedJson, ValidationErrorResponse,
};
use crate::models::Order;

/// Create order endpoint
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body(
        content = CreateOrderRequest,
        description = "Order to place; orderId and timestamp are ignored",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Order stored", body = OrderCreatedResponse),
        (status = 422, description = "Invalid body", body = ValidationErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<OrderCreatedResponse> {
    let order = state.orders.create_order(req).await?;
    Ok(Json(OrderCreatedResponse {
        order_id: order.order_id,
        message: "Order created successfully".to_string(),
    }))
}

/// List orders with offset pagination
///
/// GET /orders?limit=10&offset=0
#[utoipa::path(
    get,
    path = "/orders",
    params(Pagination),
    responses(
        (status = 200, description = "One page of orders", body = [Order]),
        (status = 422, description = "Invalid limit or offset", body = ValidationErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> ApiResult<Vec<Order>> {
    let orders = state.orders.list_orders(page).await?;
    Ok(Json(orders))
}

/// Fetch one order by id
///
/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(("order_id" = String, Path, description = "Order identifier returned at creation")),
    responses(
        (status = 200, description = "The order", body = Order),
        (status = 404, description = "Unknown order id", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    ApiPath(order_id): ApiPath<String>,
) -> ApiResult<Order> {
    let order = state.orders.get_order(&order_id).await?;
    Ok(Json(order))
}
