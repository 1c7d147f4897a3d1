use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use models::admin::AdminCredential;
use service::{runtime, storage::json_file::JsonFileBackend, ContentStore};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Open the JSON-file store named by the config, seeding it on first run.
pub async fn open_store(cfg: &AppConfig) -> Result<Arc<ContentStore>, StartupError> {
    runtime::ensure_env(&cfg.storage.data_file)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let backend = JsonFileBackend::new(&cfg.storage.data_file).pretty(cfg.storage.pretty);
    let default_admin = AdminCredential::new(&cfg.admin.username, &cfg.admin.password);
    Ok(ContentStore::open(Arc::new(backend), default_admin).await?)
}

/// Router over a store from the given config.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let store = open_store(cfg).await?;
    Ok(routes::build_router(AppState::new(store), build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(err = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Serve with an already loaded config until Ctrl+C.
pub async fn run_with(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, data_file = %cfg.storage.data_file, "creashift server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
