use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub app: String,
    pub env: String,
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to the {} API!", state.config.project_name),
        app: state.config.project_name,
        env: state.config.env,
        status: "running",
    })
}

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
