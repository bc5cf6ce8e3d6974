pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the full HTTP router
///
/// Separate from [`run_server`] so tests can drive it with `oneshot`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Catalog
        .route("/products", get(handlers::list_products))
        .route("/products/{product_id}", put(handlers::update_product))
        // Orders
        .route("/orders", get(handlers::list_orders).post(handlers::create_order))
        .route("/orders/{order_id}", get(handlers::get_order))
        // Health check
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Start HTTP Gateway server
///
/// Returns once a shutdown signal has been received and in-flight
/// requests have drained.
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);

    // Bind address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            config.port
        )
    })?;

    tracing::info!("🚀 Gateway listening on http://{}", addr);
    tracing::info!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

/// Wait for Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
