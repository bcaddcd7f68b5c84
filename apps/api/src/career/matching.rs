//! Matching and insights: pure local helpers. No completion calls.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::analysis::Analysis;
use crate::models::career::{AlternativeCareer, IndustryDemand};

const TRENDING_CAREERS: &[&str] = &[
    "ai engineer",
    "machine learning engineer",
    "data scientist",
    "full stack developer",
    "cloud architect",
    "devops engineer",
    "cybersecurity specialist",
    "blockchain developer",
];

const STABLE_CAREERS: &[&str] = &[
    "software engineer",
    "web developer",
    "mobile developer",
    "backend developer",
    "frontend developer",
    "qa engineer",
];

const JOB_OPENINGS_ESTIMATE: &str = "moderate to high";
const AVG_SALARY_RANGE: &str = "$60k - $120k";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillMatch {
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Always empty; transferable-skill detection is not implemented.
    pub transferable_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrowthProjection {
    High,
    Moderate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemandAnalysis {
    pub demand_level: IndustryDemand,
    pub growth_projection: GrowthProjection,
    pub job_openings_estimate: String,
    pub avg_salary_range: String,
}

/// Read-oriented view of a stored analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerInsights {
    pub career: String,
    pub confidence: u8,
    pub skill_match: u8,
    pub market_readiness: u8,
    pub industry_demand: DemandAnalysis,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub time_to_ready: String,
    pub reasoning: String,
    pub alternatives: Vec<AlternativeCareer>,
    /// Profile skills against the roadmap's focus skills.
    pub skill_coverage: SkillMatch,
}

/// Case-insensitive set overlap between what the student has and what is required.
///
/// `match_percentage` is `matched * 100 / required`, truncated; 0 when nothing is required.
pub fn calculate_skill_match(profile_skills: &[String], required_skills: &[String]) -> SkillMatch {
    let profile: BTreeSet<String> = profile_skills.iter().map(|s| s.to_lowercase()).collect();
    let required: BTreeSet<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    if required.is_empty() {
        return SkillMatch {
            match_percentage: 0,
            matched_skills: vec![],
            missing_skills: vec![],
            transferable_skills: vec![],
        };
    }

    let matched: Vec<String> = profile.intersection(&required).cloned().collect();
    let missing: Vec<String> = required.difference(&profile).cloned().collect();
    let match_percentage = (matched.len() * 100 / required.len()) as u32;

    SkillMatch {
        match_percentage,
        matched_skills: matched,
        missing_skills: missing,
        transferable_skills: vec![],
    }
}

/// Static keyword lookup; unrecognised careers default to stable/moderate.
pub fn analyze_industry_demand(career: &str) -> DemandAnalysis {
    let career_lower = career.to_lowercase();

    let (demand_level, growth_projection) = if TRENDING_CAREERS
        .iter()
        .any(|c| career_lower.contains(c))
    {
        (IndustryDemand::Trending, GrowthProjection::High)
    } else {
        if !STABLE_CAREERS.iter().any(|c| career_lower.contains(c)) {
            debug!("Career '{career}' not in demand lists; defaulting to stable");
        }
        (IndustryDemand::Stable, GrowthProjection::Moderate)
    };

    DemandAnalysis {
        demand_level,
        growth_projection,
        job_openings_estimate: JOB_OPENINGS_ESTIMATE.to_string(),
        avg_salary_range: AVG_SALARY_RANGE.to_string(),
    }
}

/// Recombines a stored decision with the demand lookup.
pub fn generate_career_insights(analysis: &Analysis) -> CareerInsights {
    let decision = &analysis.career_decision;
    let skill_coverage = calculate_skill_match(
        &analysis.profile.skill_names(),
        &analysis.roadmap.focus_skills(),
    );

    CareerInsights {
        career: decision.career.clone(),
        confidence: decision.confidence,
        skill_match: decision.skill_match_percentage,
        market_readiness: decision.market_readiness,
        industry_demand: analyze_industry_demand(&decision.career),
        strengths: decision.key_strengths.clone(),
        gaps: decision.skill_gaps.clone(),
        time_to_ready: decision.time_to_job_ready.clone(),
        reasoning: decision.reasoning.clone(),
        alternatives: decision.alternatives.clone(),
        skill_coverage,
    }
}
