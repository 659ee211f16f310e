use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillmatch-api"
    }))
}

/// GET /api/health
/// Pings the database before reporting healthy.
pub async fn db_health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await?;
    Ok(Json(json!({
        "status": "healthy",
        "database": "connected"
    })))
}
