//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8000/docs`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    CreateOrderRequest, ErrorResponse, FieldIssue, MessageResponse, OrderCreatedResponse,
    ValidationErrorResponse,
};
use crate::models::{Item, Order, Product, UserAddress};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "1.0.0",
        description = "Product catalog and order placement backed by a document store."
    ),
    servers(
        (url = "http://localhost:8000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::catalog::list_products,
        crate::gateway::handlers::catalog::update_product,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::list_orders,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            Product,
            Item,
            UserAddress,
            Order,
            CreateOrderRequest,
            OrderCreatedResponse,
            MessageResponse,
            ErrorResponse,
            FieldIssue,
            ValidationErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Catalog", description = "Product listing and stock updates"),
        (name = "Orders", description = "Order placement and lookup"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
