//! Employees API Module
//!
//! Profile management for HR admins. Accounts themselves live on the
//! platform; removal is a protected platform action the portal only
//! points at.

mod handler;

use axum::{Router, routing::delete, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pages/manage-employees", get(handler::view))
        .route("/api/pages/manage-employees/save", post(handler::save))
        .route("/api/pages/manage-employees/photo", post(handler::upload_photo))
        .route("/api/pages/manage-employees/{id}", delete(handler::remove))
}
