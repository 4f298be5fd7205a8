//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub version: &'static str,
    /// Whether a trivial store query succeeded
    pub store_reachable: bool,
}

/// GET /health - 503 when the store cannot be queried
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let store_reachable = match state.store.categories().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Health check store query failed: {}", e);
            false
        }
    };

    let (code, status) = if store_reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            success: store_reachable,
            status,
            version: env!("CARGO_PKG_VERSION"),
            store_reachable,
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
