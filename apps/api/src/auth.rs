//! Clerk session verification.
//!
//! The frontend attaches a Clerk session token as a Bearer credential; every
//! protected handler resolves it to a `user_id` through the Clerk sessions
//! API. Tokens are only ever verified here, never issued.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

const CLERK_API_URL: &str = "https://api.clerk.com/v1";

#[derive(Debug, Deserialize)]
struct SessionVerifyResponse {
    user_id: String,
}

/// Client for the Clerk backend API.
#[derive(Clone)]
pub struct ClerkClient {
    client: reqwest::Client,
    secret_key: String,
}

impl ClerkClient {
    pub fn new(secret_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            secret_key,
        }
    }

    /// Verifies a session token and returns the owning user's id.
    /// Any failure maps to 401; callers never see transport detail.
    pub async fn verify_session(&self, token: &str) -> Result<String, AppError> {
        let response = self
            .client
            .get(format!("{CLERK_API_URL}/sessions/{token}/verify"))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| {
                warn!("Clerk verification request failed: {e}");
                AppError::Unauthorized("Token verification failed".to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }

        let session: SessionVerifyResponse = response.json().await.map_err(|e| {
            warn!("Clerk verification response malformed: {e}");
            AppError::Unauthorized("Token verification failed".to_string())
        })?;

        Ok(session.user_id)
    }
}

/// The authenticated caller, extracted from the Authorization header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("No authorization header".to_string()))?;

        let token = bearer_token(header)
            .ok_or_else(|| AppError::Unauthorized("Malformed authorization header".to_string()))?;

        let user_id = state.clerk.verify_session(token).await?;
        Ok(AuthUser { user_id })
    }
}

/// Extracts the token from a `Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extracts_value() {
        assert_eq!(bearer_token("Bearer sess_abc123"), Some("sess_abc123"));
    }

    #[test]
    fn test_bearer_token_trims_whitespace() {
        assert_eq!(bearer_token("Bearer   sess_abc123  "), Some("sess_abc123"));
    }

    #[test]
    fn test_bearer_token_rejects_missing_scheme() {
        assert_eq!(bearer_token("sess_abc123"), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
    }

    #[test]
    fn test_bearer_token_rejects_empty_token() {
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer    "), None);
    }
}
