//! Axum route handlers for the Students API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::StudentProfile;
use crate::models::{Lookup, ProfilePayload};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub profile: StudentProfile,
}

/// GET /api/students/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Lookup<StudentProfile>>, AppError> {
    let profile = state.store.get_profile(&user_id).await?;
    Ok(Json(Lookup::from_option(profile, "No profile found")))
}

/// POST /api/students/profile
///
/// Saves or overwrites the caller's profile. No history is kept.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ProfilePayload(profile): ProfilePayload,
) -> Result<Json<SaveProfileResponse>, AppError> {
    state.store.save_profile(&user_id, &profile).await?;

    Ok(Json(SaveProfileResponse {
        status: "success",
        message: "Profile saved successfully",
        profile,
    }))
}
