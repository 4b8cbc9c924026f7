use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Verifies store connectivity; the one place a store failure surfaces as a
/// status code instead of a redirect.
async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    state.store().ping().await.map_err(|e| {
        tracing::error!("store health check failed: {e}");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    Ok(Json(json!({
        "status": "ok",
        "store": "connected",
    })))
}
