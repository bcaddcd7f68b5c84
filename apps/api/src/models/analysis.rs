use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::career::{CareerDecision, LearningRoadmap};
use crate::models::profile::StudentProfile;
use crate::progress::RoadmapProgress;

/// A stored career analysis: the profile snapshot it was computed from,
/// the decision, the roadmap, and progress against that roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    pub id: Uuid,
    pub profile: StudentProfile,
    pub career_decision: CareerDecision,
    pub roadmap: LearningRoadmap,
    pub progress: RoadmapProgress,
    pub created_at: DateTime<Utc>,
}

impl Analysis {
    pub fn new(
        profile: StudentProfile,
        career_decision: CareerDecision,
        roadmap: LearningRoadmap,
    ) -> Self {
        let progress = RoadmapProgress::new(roadmap.roadmap.len());
        Self {
            id: Uuid::new_v4(),
            profile,
            career_decision,
            roadmap,
            progress,
            created_at: Utc::now(),
        }
    }
}
