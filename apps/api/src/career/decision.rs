//! Career decision: asks the completion service for one best-fit career.

use tracing::info;

use crate::career::prompts::{CAREER_DECISION_SYSTEM, CAREER_DECISION_TEMPERATURE};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{complete_json, CompletionProvider, CompletionRequest};
use crate::models::career::CareerDecision;
use crate::models::profile::StudentProfile;

/// Chooses a career for `profile`. One outbound call, no retry, no caching.
pub async fn decide_career(
    llm: &dyn CompletionProvider,
    profile: &StudentProfile,
) -> Result<CareerDecision, AppError> {
    let system = format!("{CAREER_DECISION_SYSTEM}\n\n{JSON_ONLY_INSTRUCTION}");
    let user = serde_json::to_string(profile).map_err(anyhow::Error::from)?;

    let decision: CareerDecision = complete_json(
        llm,
        CompletionRequest {
            system: &system,
            user: &user,
            temperature: CAREER_DECISION_TEMPERATURE,
        },
    )
    .await?;
    decision.validate()?;

    info!(
        "Career decision: {} (confidence {})",
        decision.career, decision.confidence
    );
    Ok(decision)
}
