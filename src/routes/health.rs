use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Catalogs are loaded before the listener binds, so a running server is ready.
/// Reports catalog sizes and which documents were overridden from disk.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.resolver.store().stats();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "catalog": stats,
            "overrides": state.config.catalog,
        })),
    )
}
