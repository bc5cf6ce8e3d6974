use std::sync::Arc;

use anyhow::Context;

use storefront::gateway::services::starter_catalog;
use storefront::{AppConfig, AppState, Store};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    let _log_guard = storefront::logging::init_logging(&app_config)?;

    tracing::info!("Starting storefront {} in {} mode", env!("GIT_HASH"), env);

    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    let store = Store::open(&app_config.store)
        .await
        .with_context(|| format!("Failed to open {:?} store", app_config.store.backend))?;

    let state = AppState::new(&store);

    if app_config.seed_catalog {
        let inserted = state.catalog.seed_catalog(&starter_catalog()).await?;
        if inserted > 0 {
            tracing::info!("Seeded catalog with {} products", inserted);
        }
    }

    storefront::gateway::run_server(&app_config.gateway, Arc::new(state)).await
}
