//! Catalog handlers (list, quantity update)

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::state::AppState;
use super::super::types::{
    ApiPath, ApiQuery, ApiResult, ErrorResponse, MessageResponse, QuantityQuery,
    ValidationErrorResponse,
};
use crate::models::{Product, ProductId};

/// List every product in the catalog
///
/// GET /products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn list_products(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Product>> {
    let products = state.catalog.list_products().await?;
    Ok(Json(products))
}

/// Overwrite a product's stock level
///
/// PUT /products/{product_id}?quantity=N
#[utoipa::path(
    put,
    path = "/products/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product identifier"),
        QuantityQuery
    ),
    responses(
        (status = 200, description = "Quantity updated", body = MessageResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 422, description = "Invalid id or quantity", body = ValidationErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    ApiPath(product_id): ApiPath<ProductId>,
    ApiQuery(query): ApiQuery<QuantityQuery>,
) -> ApiResult<MessageResponse> {
    state
        .catalog
        .update_product_quantity(product_id, query.quantity)
        .await?;
    Ok(Json(MessageResponse::new("Product updated successfully")))
}
