//! Axum route handlers for the Career API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::AuthUser;
use crate::career::matching::{generate_career_insights, CareerInsights};
use crate::career::pipeline::run_analysis;
use crate::errors::AppError;
use crate::models::analysis::Analysis;
use crate::models::career::{AlternativeCareer, CareerDecision, LearningRoadmap};
use crate::models::profile::StudentProfile;
use crate::models::{Lookup, ProfilePayload};
use crate::state::AppState;

const NO_ROADMAP: &str = "No active roadmap found";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ValidateProfileResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: StudentProfile,
}

#[derive(Debug, Serialize)]
pub struct GenerateRoadmapResponse {
    pub status: &'static str,
    pub user_id: String,
    pub career_decision: CareerDecision,
    pub learning_roadmap: LearningRoadmap,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub status: &'static str,
    pub insights: CareerInsights,
}

#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub status: &'static str,
    pub current_career: String,
    pub alternatives: Vec<AlternativeCareer>,
}

#[derive(Debug, Serialize)]
pub struct DeleteRoadmapResponse {
    pub status: &'static str,
    pub message: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/career/analyze
///
/// Validates a profile and echoes it back. No completion call is made.
pub async fn handle_validate_profile(
    AuthUser(_user_id): AuthUser,
    ProfilePayload(profile): ProfilePayload,
) -> Json<ValidateProfileResponse> {
    Json(ValidateProfileResponse {
        status: "success",
        message: "Student profile validated successfully",
        data: profile,
    })
}

/// POST /api/career/roadmap
///
/// Full pipeline: validate → career decision → roadmap → store.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ProfilePayload(profile): ProfilePayload,
) -> Result<Json<GenerateRoadmapResponse>, AppError> {
    let analysis =
        run_analysis(state.llm.as_ref(), state.store.as_ref(), &user_id, profile).await?;

    Ok(Json(GenerateRoadmapResponse {
        status: "success",
        user_id,
        career_decision: analysis.career_decision,
        learning_roadmap: analysis.roadmap,
    }))
}

/// GET /api/career/roadmap
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Lookup<Analysis>>, AppError> {
    let analysis = state.store.get_active_analysis(&user_id).await?;
    Ok(Json(Lookup::from_option(analysis, NO_ROADMAP)))
}

/// DELETE /api/career/roadmap
pub async fn handle_delete_roadmap(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<DeleteRoadmapResponse>, AppError> {
    let response = if state.store.delete_active_analysis(&user_id).await? {
        DeleteRoadmapResponse {
            status: "success",
            message: "Roadmap deleted successfully",
        }
    } else {
        DeleteRoadmapResponse {
            status: "not_found",
            message: "No roadmap to delete",
        }
    };
    Ok(Json(response))
}

/// GET /api/career/insights
pub async fn handle_get_insights(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Lookup<InsightsResponse>>, AppError> {
    let insights = state
        .store
        .get_active_analysis(&user_id)
        .await?
        .map(|analysis| InsightsResponse {
            status: "success",
            insights: generate_career_insights(&analysis),
        });
    Ok(Json(Lookup::from_option(insights, NO_ROADMAP)))
}

/// GET /api/career/alternatives
pub async fn handle_get_alternatives(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Lookup<AlternativesResponse>>, AppError> {
    let alternatives = state
        .store
        .get_active_analysis(&user_id)
        .await?
        .map(|analysis| AlternativesResponse {
            status: "success",
            current_career: analysis.career_decision.career,
            alternatives: analysis.career_decision.alternatives,
        });
    Ok(Json(Lookup::from_option(alternatives, NO_ROADMAP)))
}
