//! End-to-end tests against the router, backed by the in-memory store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::bail;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use storefront::gateway::router;
use storefront::gateway::services::{OrderService, starter_catalog};
use storefront::persistence::{HealthProbe, OrderRepository, ProductRepository};
use storefront::{AppState, Order, Product, ProductId, Store};

/// Seeded app with order ids `order_1`, `order_2`, ...
async fn seeded_app() -> Router {
    let store = Store::in_memory();
    let counter = Arc::new(AtomicU64::new(0));
    let orders = OrderService::with_id_generator(store.orders.clone(), move || {
        format!("order_{}", counter.fetch_add(1, Ordering::SeqCst) + 1)
    });
    let state = AppState::new(&store).with_order_service(orders);
    state.catalog.seed_catalog(&starter_catalog()).await.unwrap();
    router(Arc::new(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    send_request(app, builder.body(body).unwrap()).await
}

async fn send_request(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn tv_order() -> Value {
    json!({
        "items": [{"productId": 1, "boughtQuantity": 2, "totalAmount": 599.98}],
        "userAddress": {"city": "Paris", "country": "France", "zipCode": "75001"}
    })
}

fn issue_fields(body: &Value) -> Vec<String> {
    body["detail"]
        .as_array()
        .expect("detail is a list")
        .iter()
        .map(|i| i["field"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_list_seeded_products() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"productId": 1, "name": "TV", "price": 499.99, "quantity": 10},
            {"productId": 2, "name": "Laptop", "price": 899.99, "quantity": 5},
            {"productId": 3, "name": "Smartphone", "price": 299.99, "quantity": 20}
        ])
    );
    for product in body.as_array().unwrap() {
        assert!(product.get("_id").is_none());
    }
}

#[tokio::test]
async fn test_update_quantity_then_list() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::PUT, "/products/2?quantity=42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Product updated successfully"}));

    let (_, products) = send(&app, Method::GET, "/products", None).await;
    let laptop = products
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["productId"] == 2)
        .unwrap();
    assert_eq!(laptop["quantity"], 42);
    assert_eq!(laptop["price"], json!(899.99));
}

#[tokio::test]
async fn test_update_to_same_quantity_is_404() {
    let app = seeded_app().await;
    // TV is seeded with quantity 10
    let (status, body) = send(&app, Method::PUT, "/products/1?quantity=10", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Product not found"}));

    let (status, _) = send(&app, Method::PUT, "/products/1?quantity=11", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_unknown_product() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::PUT, "/products/99?quantity=1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Product not found"}));
}

#[tokio::test]
async fn test_update_bad_inputs_are_422() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::PUT, "/products/1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(issue_fields(&body), vec!["query"]);

    let (status, _) = send(&app, Method::PUT, "/products/1?quantity=lots", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(&app, Method::PUT, "/products/tv?quantity=1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(issue_fields(&body), vec!["path"]);
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_create_then_fetch_order() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::POST, "/orders", Some(tv_order())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"orderId": "order_1", "message": "Order created successfully"})
    );

    let (status, order) = send(&app, Method::GET, "/orders/order_1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["orderId"], "order_1");
    assert_eq!(order["items"], tv_order()["items"]);
    assert_eq!(order["userAddress"], tv_order()["userAddress"]);
    assert!(order["timestamp"].is_string());
    assert!(order.get("_id").is_none());

    // Stock is not touched by orders
    let (_, products) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(products[0]["quantity"], 10);
}

#[tokio::test]
async fn test_client_order_id_is_ignored() {
    let app = seeded_app().await;
    let mut req = tv_order();
    req["orderId"] = json!("mine");
    req["timestamp"] = json!("2001-01-01T00:00:00Z");

    let (status, body) = send(&app, Method::POST, "/orders", Some(req)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["orderId"], "order_1");

    let (status, _) = send(&app, Method::GET, "/orders/mine", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, order) = send(&app, Method::GET, "/orders/order_1", None).await;
    assert_ne!(order["timestamp"], "2001-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_order_with_no_items_is_accepted() {
    let app = seeded_app().await;
    let req = json!({
        "items": [],
        "userAddress": {"city": "Oslo", "country": "Norway", "zipCode": "0150"}
    });
    let (status, _) = send(&app, Method::POST, "/orders", Some(req)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_get_unknown_order() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/orders/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Order not found"}));
}

#[tokio::test]
async fn test_list_orders_pagination() {
    let app = seeded_app().await;
    for _ in 0..3 {
        send(&app, Method::POST, "/orders", Some(tv_order())).await;
    }

    let (status, all) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["orderId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["order_1", "order_2", "order_3"]);

    let (_, page) = send(&app, Method::GET, "/orders?limit=1&offset=1", None).await;
    assert_eq!(page.as_array().unwrap().len(), 1);
    assert_eq!(page[0]["orderId"], "order_2");

    let (_, past_end) = send(&app, Method::GET, "/orders?offset=3", None).await;
    assert_eq!(past_end, json!([]));

    let (_, none) = send(&app, Method::GET, "/orders?limit=0", None).await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_list_orders_default_limit() {
    let app = seeded_app().await;
    for _ in 0..12 {
        send(&app, Method::POST, "/orders", Some(tv_order())).await;
    }
    let (_, page) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(page.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_negative_pagination_is_422() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/orders?limit=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(issue_fields(&body), vec!["query"]);

    let (status, _) = send(&app, Method::GET, "/orders?offset=-5", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_empty_city_is_422() {
    let app = seeded_app().await;
    let mut req = tv_order();
    req["userAddress"]["city"] = json!("");

    let (status, body) = send(&app, Method::POST, "/orders", Some(req)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(issue_fields(&body), vec!["userAddress.city"]);
    assert_eq!(body["detail"][0]["message"], "must not be empty");
}

#[tokio::test]
async fn test_zero_bought_quantity_is_422() {
    let app = seeded_app().await;
    let mut req = tv_order();
    req["items"][0]["boughtQuantity"] = json!(0);

    let (status, body) = send(&app, Method::POST, "/orders", Some(req)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(issue_fields(&body), vec!["items[0].boughtQuantity"]);
}

#[tokio::test]
async fn test_negative_total_amount_is_422() {
    let app = seeded_app().await;
    let mut req = tv_order();
    req["items"][0]["totalAmount"] = json!(-1.5);

    let (status, body) = send(&app, Method::POST, "/orders", Some(req)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(issue_fields(&body), vec!["body"]);

    // Nothing stored
    let (_, orders) = send(&app, Method::GET, "/orders", None).await;
    assert_eq!(orders, json!([]));
}

#[tokio::test]
async fn test_missing_address_is_422() {
    let app = seeded_app().await;
    let req = json!({"items": []});
    let (status, _) = send(&app, Method::POST, "/orders", Some(req)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_422() {
    let app = seeded_app().await;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/orders")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"items\": ["))
        .unwrap();
    let (status, body) = send_request(&app, req).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(issue_fields(&body), vec!["body"]);
}

// ============================================================================
// Health and docs
// ============================================================================

#[tokio::test]
async fn test_health_ok() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
    assert!(body["timestampMs"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_openapi_json_served() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Storefront API");
    assert!(body["paths"]["/orders/{order_id}"].is_object());
}

// ============================================================================
// Store failures
// ============================================================================

/// Backend whose every call fails
struct BrokenStore;

#[async_trait]
impl ProductRepository for BrokenStore {
    async fn list_products(&self) -> anyhow::Result<Vec<Product>> {
        bail!("connection refused")
    }
    async fn count_products(&self) -> anyhow::Result<u64> {
        bail!("connection refused")
    }
    async fn insert_products(&self, _products: &[Product]) -> anyhow::Result<()> {
        bail!("connection refused")
    }
    async fn set_quantity(&self, _id: ProductId, _quantity: i64) -> anyhow::Result<u64> {
        bail!("connection refused")
    }
}

#[async_trait]
impl OrderRepository for BrokenStore {
    async fn insert_order(&self, _order: &Order) -> anyhow::Result<()> {
        bail!("connection refused")
    }
    async fn get_order(&self, _order_id: &str) -> anyhow::Result<Option<Order>> {
        bail!("connection refused")
    }
    async fn list_orders(&self, _offset: u64, _limit: u64) -> anyhow::Result<Vec<Order>> {
        bail!("connection refused")
    }
}

#[async_trait]
impl HealthProbe for BrokenStore {
    async fn ping(&self) -> anyhow::Result<()> {
        bail!("connection refused")
    }
}

fn broken_app() -> Router {
    let store = Store::from_backend(BrokenStore);
    router(Arc::new(AppState::new(&store)))
}

#[tokio::test]
async fn test_store_failure_is_500_without_cause() {
    let app = broken_app();
    let (status, body) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": "Internal Server Error"}));

    let (status, body) = send(&app, Method::POST, "/orders", Some(tv_order())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_health_unavailable() {
    let app = broken_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}
