//! Roadmap generator: asks the completion service for a phased learning plan.

use serde::Serialize;
use tracing::info;

use crate::career::prompts::{ROADMAP_SYSTEM, ROADMAP_TEMPERATURE};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{complete_json, CompletionProvider, CompletionRequest};
use crate::models::career::LearningRoadmap;
use crate::models::profile::StudentProfile;

#[derive(Serialize)]
struct RoadmapInput<'a> {
    career: &'a str,
    student_profile: &'a StudentProfile,
}

/// Generates a roadmap for `career`, adapted to the student's time budget and pace.
pub async fn generate_roadmap(
    llm: &dyn CompletionProvider,
    career: &str,
    profile: &StudentProfile,
) -> Result<LearningRoadmap, AppError> {
    let system = format!("{ROADMAP_SYSTEM}\n\n{JSON_ONLY_INSTRUCTION}");
    let user = serde_json::to_string(&RoadmapInput {
        career,
        student_profile: profile,
    })
    .map_err(anyhow::Error::from)?;

    let roadmap: LearningRoadmap = complete_json(
        llm,
        CompletionRequest {
            system: &system,
            user: &user,
            temperature: ROADMAP_TEMPERATURE,
        },
    )
    .await?;
    roadmap.validate()?;

    info!(
        "Roadmap for {career}: {} phases over {} months ({} pace, {}h/week)",
        roadmap.roadmap.len(),
        roadmap.duration_months,
        profile.learning_pace,
        profile.time_per_week
    );
    Ok(roadmap)
}
