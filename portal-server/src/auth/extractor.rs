//! Session Extractor
//!
//! Custom extractor that hands page handlers the resolved profile — each
//! page receives the current user as its only external input.

use axum::{extract::FromRequestParts, http::request::Parts};

use portal_client::ClientError;
use shared::{Stored, UserProfile};

use crate::auth::middleware::bearer_token;
use crate::core::{AppError, ServerState};
use crate::security_log;

/// The resolved session: stored profile plus the bearer token it came
/// from (the token is passed through on logout).
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: Stored<UserProfile>,
    pub token: String,
}

impl CurrentUser {
    pub fn profile(&self) -> &UserProfile {
        &self.user.fields
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already resolved (from middleware)
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header.and_then(bearer_token) {
            Some(token) => token.to_string(),
            None => {
                security_log!("WARN", "session_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::session_missing(state.sessions.login_url()));
            }
        };

        match state.sessions.current_user(&token).await {
            Ok(user) => {
                let current = CurrentUser { user, token };

                // Store in extensions for potential reuse
                parts.extensions.insert(current.clone());

                Ok(current)
            }
            Err(ClientError::SessionMissing) => {
                security_log!(
                    "WARN",
                    "session_rejected",
                    uri = format!("{:?}", parts.uri)
                );
                Err(AppError::session_missing(state.sessions.login_url()))
            }
            Err(e) => Err(AppError::from(e)),
        }
    }
}
