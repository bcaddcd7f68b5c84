use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Lookup, ValidatedJson};
use crate::progress::{PhaseStatus, RoadmapProgress};
use crate::state::AppState;

const NO_ROADMAP: &str = "No active roadmap found";

#[derive(Debug, Deserialize)]
pub struct ProgressUpdateRequest {
    pub phase_index: usize,
    pub status: PhaseStatus,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub status: &'static str,
    pub percent_complete: u32,
    pub progress: RoadmapProgress,
}

impl From<RoadmapProgress> for ProgressResponse {
    fn from(progress: RoadmapProgress) -> Self {
        Self {
            status: "success",
            percent_complete: progress.percent_complete(),
            progress,
        }
    }
}

/// GET /api/progress
pub async fn handle_get_progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Lookup<ProgressResponse>>, AppError> {
    let progress = state
        .store
        .get_active_analysis(&user_id)
        .await?
        .map(|analysis| ProgressResponse::from(analysis.progress));
    Ok(Json(Lookup::from_option(progress, NO_ROADMAP)))
}

/// POST /api/progress/update
///
/// Marks one roadmap phase completed or pending and updates the streak.
pub async fn handle_update_progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(req): ValidatedJson<ProgressUpdateRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let analysis = state
        .store
        .get_active_analysis(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(NO_ROADMAP.to_string()))?;

    let mut progress = analysis.progress;
    progress.apply(req.phase_index, req.status, Utc::now().date_naive())?;

    if !state
        .store
        .save_progress(&user_id, analysis.id, &progress)
        .await?
    {
        // Superseded or deleted between read and write.
        return Err(AppError::NotFound(NO_ROADMAP.to_string()));
    }

    info!(
        "Progress for user {user_id}: {}/{} phases, streak {}",
        progress.completed_phases, progress.total_phases, progress.streak_days
    );
    Ok(Json(progress.into()))
}
