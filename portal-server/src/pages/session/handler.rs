//! Session Handlers
//!
//! The layout fetches the resolved profile and the role menu together,
//! then passes the profile into whichever page it renders.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use shared::{ApiResponse, Stored, UserProfile};

use crate::auth::CurrentUser;
use crate::core::{AppResult, ServerState, ok};
use crate::nav::{NavItem, build_menu};

/// Everything the layout needs to render its chrome.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user: Stored<UserProfile>,
    pub role_label: &'static str,
    pub avatar_url: String,
    pub nav: Vec<NavItem>,
    pub org_name: String,
}

/// Get current user info and the navigation for their role
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<SessionView>>> {
    let role_label = user.profile().role.label();
    let avatar_url = user.profile().avatar_url();
    let nav = build_menu(user.profile().role);

    Ok(ok(SessionView {
        user: user.user,
        role_label,
        avatar_url,
        nav,
        org_name: state.config.org_name.clone(),
    }))
}

/// Logout handler
///
/// Ends the session at the identity service; the browser then reloads
/// into the login flow.
pub async fn logout(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<()>>> {
    state.sessions.logout(&user.token).await?;

    tracing::info!(email = %user.user.email, "User logged out");

    Ok(ok(()))
}
