use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const MIN_TIME_PER_WEEK: u32 = 1;
pub const MAX_TIME_PER_WEEK: u32 = 60;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LearningPace {
    Slow,
    Medium,
    Fast,
}

impl fmt::Display for LearningPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LearningPace::Slow => "slow",
            LearningPace::Medium => "medium",
            LearningPace::Fast => "fast",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid profile payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("time_per_week must be between 1 and 60, got {0}")]
    TimeOutOfRange(u32),
}

/// A student's self-reported profile.
///
/// Only constructed through [`StudentProfile::from_value`] (request bodies) or
/// deserialized back from storage, which holds values that passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentProfile {
    pub interests: Vec<String>,
    pub skills: BTreeMap<String, Proficiency>,
    pub time_per_week: u32,
    pub learning_pace: LearningPace,
    pub goal: String,
}

impl StudentProfile {
    /// Validates an untyped request payload into a profile.
    ///
    /// Enum membership and field types are enforced by decoding; the weekly time
    /// budget is range-checked afterwards. Nothing is coerced.
    pub fn from_value(value: Value) -> Result<Self, ProfileError> {
        let profile: StudentProfile = serde_json::from_value(value)?;
        profile.check_time_budget()?;
        Ok(profile)
    }

    fn check_time_budget(&self) -> Result<(), ProfileError> {
        if !(MIN_TIME_PER_WEEK..=MAX_TIME_PER_WEEK).contains(&self.time_per_week) {
            return Err(ProfileError::TimeOutOfRange(self.time_per_week));
        }
        Ok(())
    }

    /// Skill names as entered, in map order.
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.keys().cloned().collect()
    }
}
