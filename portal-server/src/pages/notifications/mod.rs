//! Notifications API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pages/send-notification", get(handler::view))
        .route("/api/pages/send-notification/send", post(handler::send))
}
