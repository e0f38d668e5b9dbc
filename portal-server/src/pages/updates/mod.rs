//! Updates API Module
//!
//! Reading and acknowledging company updates, plus the admin publishing
//! page.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pages/updates", get(handler::view))
        .route("/api/pages/updates/{id}/acknowledge", post(handler::acknowledge))
        .route("/api/pages/manage-updates", get(handler::manage_view))
        .route("/api/pages/manage-updates/post", post(handler::post_update))
}
