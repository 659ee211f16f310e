use sqlx::PgPool;

use crate::auth::ClerkClient;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub clerk: ClerkClient,
    /// Kept for handlers that need runtime settings beyond the clients above.
    #[allow(dead_code)]
    pub config: Config,
}
