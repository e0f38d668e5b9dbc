//! Health Check Handler

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use shared::ApiResponse;

use crate::core::{ServerState, ok};

#[derive(Debug, Serialize)]
pub struct HealthView {
    pub status: &'static str,
    pub environment: String,
}

pub async fn health(State(state): State<ServerState>) -> Json<ApiResponse<HealthView>> {
    ok(HealthView {
        status: "healthy",
        environment: state.config.environment.clone(),
    })
}
