//! Attendance API Module
//!
//! Daily attendance marking for admins and the self-service history page.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pages/manage-attendance", get(handler::manage_view))
        .route("/api/pages/manage-attendance/mark", post(handler::mark))
        .route("/api/pages/my-attendance", get(handler::my_view))
}
