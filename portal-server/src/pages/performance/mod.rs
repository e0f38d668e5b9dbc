//! Performance API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pages/manage-performance", get(handler::manage_view))
        .route("/api/pages/manage-performance/log", post(handler::log_record))
        .route("/api/pages/my-performance", get(handler::my_view))
}
