//! Session API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/session/me", get(handler::me))
        .route("/api/session/logout", post(handler::logout))
}
