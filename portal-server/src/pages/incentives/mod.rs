//! Incentives API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pages/manage-incentives", get(handler::manage_view))
        .route("/api/pages/manage-incentives/award", post(handler::award))
        .route("/api/pages/my-incentives", get(handler::my_view))
}
