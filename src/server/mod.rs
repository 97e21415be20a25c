//! HTTP API for classification and registration.
//!
//! Endpoints:
//! - `POST /api/check-url` - classify the domain of a URL
//! - `POST /api/add-legitimate` / `POST /api/add-suspicious` - register a domain
//! - `GET /api/test` - liveness
//! - `GET /api/db-test` - store connectivity and set sizes
//! - `GET /status` - JSON request counters
//! - `GET /metrics` - Prometheus-compatible metrics

mod error;
mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::storage::SqliteStore;
use handlers::{
    add_legitimate_handler, add_suspicious_handler, api_test_handler, check_url_handler,
    db_test_handler, metrics_handler, status_handler,
};

pub use error::{ApiError, STORE_UNAVAILABLE_MESSAGE};
pub use types::{AppState, CheckUrlResponse, RegisterResponse};

/// Builds the router; any origin may call the API.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/check-url", post(check_url_handler))
        .route("/api/add-legitimate", post(add_legitimate_handler))
        .route("/api/add-suspicious", post(add_suspicious_handler))
        .route("/api/test", get(api_test_handler))
        .route("/api/db-test", get(db_test_handler))
        .route("/status", get(status_handler))
        .route("/metrics", get(metrics_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the configured address and serves until `shutdown` is cancelled.
pub async fn serve(
    config: &Config,
    store: SqliteStore,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    let address = config.listen_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", address, e))?;

    let state = AppState::new(store, config.request_timeout());
    serve_on(listener, state, shutdown).await
}

/// Serves on an already-bound listener.
///
/// In-flight requests are allowed to finish once `shutdown` fires.
pub async fn serve_on(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    let local = listener.local_addr()?;
    log::info!("API server listening on http://{}/", local);
    log::info!("  - Check: http://{}/api/check-url", local);
    log::info!("  - Status: http://{}/status", local);
    log::info!("  - Metrics: http://{}/metrics", local);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    log::info!("API server stopped");
    Ok(())
}
