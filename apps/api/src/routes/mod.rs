pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::career::handlers as career;
use crate::progress::handlers as progress;
use crate::state::AppState;
use crate::students::handlers as students;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Students API
        .route(
            "/api/students/profile",
            get(students::handle_get_profile).post(students::handle_save_profile),
        )
        // Career API
        .route("/api/career/analyze", post(career::handle_validate_profile))
        .route(
            "/api/career/roadmap",
            get(career::handle_get_roadmap)
                .post(career::handle_generate_roadmap)
                .delete(career::handle_delete_roadmap),
        )
        .route("/api/career/insights", get(career::handle_get_insights))
        .route(
            "/api/career/alternatives",
            get(career::handle_get_alternatives),
        )
        // Progress API
        .route("/api/progress", get(progress::handle_get_progress))
        .route(
            "/api/progress/update",
            post(progress::handle_update_progress),
        )
        .with_state(state)
}
