pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::db_health_handler))
        .route("/api/skill-analysis/analyze", post(handlers::handle_analyze))
        .route("/api/skill-analysis", post(handlers::handle_save))
        .route("/api/skill-analysis/history", get(handlers::handle_history))
        .route(
            "/api/skill-analysis/:id",
            get(handlers::handle_get).delete(handlers::handle_delete),
        )
        .route("/api/skill-analysis/:id/report", get(handlers::handle_report))
        .with_state(state)
}
