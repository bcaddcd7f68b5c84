use serde::{Deserialize, Deserializer, Serialize};

use crate::llm_client::LlmError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IndustryDemand {
    Trending,
    Stable,
    Declining,
}

/// An alternative career suggested next to the primary choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlternativeCareer {
    pub career: String,
    pub match_score: u8,
    pub reason: String,
}

/// The single best-fit career chosen by the completion service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerDecision {
    pub career: String,
    pub reasoning: String,
    pub confidence: u8,
    pub skill_match_percentage: u8,
    pub market_readiness: u8,
    pub industry_demand: IndustryDemand,
    pub key_strengths: Vec<String>,
    pub skill_gaps: Vec<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub time_to_job_ready: String,
    pub alternatives: Vec<AlternativeCareer>,
}

impl CareerDecision {
    /// Range checks that typed decoding alone cannot express.
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.career.trim().is_empty() {
            return Err(LlmError::Invalid("career is empty".to_string()));
        }
        check_score("confidence", self.confidence)?;
        check_score("skill_match_percentage", self.skill_match_percentage)?;
        check_score("market_readiness", self.market_readiness)?;
        for alt in &self.alternatives {
            check_score("alternatives.match_score", alt.match_score)?;
        }
        Ok(())
    }
}

fn check_score(field: &str, value: u8) -> Result<(), LlmError> {
    if value > 100 {
        return Err(LlmError::Invalid(format!(
            "{field} must be within 0..=100, got {value}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapPhase {
    pub phase: String,
    pub focus_skills: Vec<String>,
    #[serde(alias = "learning_outcomes")]
    pub outcomes: Vec<String>,
}

/// A phased learning plan for a chosen career.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LearningRoadmap {
    pub duration_months: u32,
    pub roadmap: Vec<RoadmapPhase>,
}

impl LearningRoadmap {
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.duration_months == 0 {
            return Err(LlmError::Invalid("duration_months must be at least 1".to_string()));
        }
        if self.roadmap.is_empty() {
            return Err(LlmError::Invalid("roadmap has no phases".to_string()));
        }
        Ok(())
    }

    /// Every focus skill across all phases, in first-seen order.
    pub fn focus_skills(&self) -> Vec<String> {
        let mut skills: Vec<String> = Vec::new();
        for skill in self.roadmap.iter().flat_map(|p| &p.focus_skills) {
            if !skills.contains(skill) {
                skills.push(skill.clone());
            }
        }
        skills
    }
}

/// Accepts `"6 months"` as well as a bare `6`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
