use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/ping
/// Bumps the request counter as a side effect; the count is never surfaced.
pub async fn ping_handler(State(state): State<AppState>) -> Json<Value> {
    state.hits.hit("hits:ping").await;
    Json(json!({"status": "ok"}))
}

/// GET /api/health/live
/// Liveness: process is up, nothing else checked.
pub async fn live_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// GET /api/health/ready
/// Readiness: round-trips the database before reporting ready.
pub async fn ready_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .map_err(|e| AppError::Unavailable(format!("database unreachable: {e}")))?;
    Ok(Json(json!({"status": "ready"})))
}
