use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portfolio"
    }))
}

/// GET /health/store
/// Read-probe against the messages table. 503 when the store is unreachable.
pub async fn store_health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let backend = state.store.backend();
    match state.store.probe().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "backend": backend })),
        ),
        Err(e) => {
            warn!("Store probe failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "backend": backend })),
            )
        }
    }
}
