//! Test doubles: scripted completion provider, in-memory store, static verifier.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::{AuthError, IdentityVerifier};
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{CompletionProvider, CompletionRequest, LlmError};
use crate::models::analysis::Analysis;
use crate::models::profile::StudentProfile;
use crate::progress::RoadmapProgress;
use crate::state::AppState;
use crate::store::Store;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

/// Returns queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedCompletion {
    responses: Mutex<VecDeque<String>>,
    fail_status: Option<u16>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedCompletion {
    pub fn new<I>(responses: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Every call fails with the given API status.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletion {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: request.system.to_string(),
            user: request.user.to_string(),
            temperature: request.temperature,
        });

        if let Some(status) = self.fail_status {
            return Err(LlmError::Api {
                status,
                message: "scripted failure".to_string(),
            });
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LlmError::Api {
                status: 500,
                message: "no scripted response left".to_string(),
            })
    }
}

struct StoredAnalysis {
    analysis: Analysis,
    active: bool,
}

/// In-memory `Store` with the same active-roadmap semantics as `PgStore`.
#[derive(Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<String, StudentProfile>>,
    analyses: Mutex<HashMap<String, Vec<StoredAnalysis>>>,
}

impl MemoryStore {
    /// Every analysis ever saved for `user_id`, active or not.
    pub fn analysis_count(&self, user_id: &str) -> usize {
        self.analyses
            .lock()
            .unwrap()
            .get(user_id)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn save_profile(&self, user_id: &str, profile: &StudentProfile) -> Result<(), AppError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(user_id.to_string(), profile.clone());
        Ok(())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<StudentProfile>, AppError> {
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }

    async fn save_analysis(&self, user_id: &str, analysis: &Analysis) -> Result<(), AppError> {
        let mut analyses = self.analyses.lock().unwrap();
        let records = analyses.entry(user_id.to_string()).or_default();
        for record in records.iter_mut() {
            record.active = false;
        }
        records.push(StoredAnalysis {
            analysis: analysis.clone(),
            active: true,
        });
        Ok(())
    }

    async fn get_active_analysis(&self, user_id: &str) -> Result<Option<Analysis>, AppError> {
        Ok(self.analyses.lock().unwrap().get(user_id).and_then(|records| {
            records
                .iter()
                .find(|r| r.active)
                .map(|r| r.analysis.clone())
        }))
    }

    async fn delete_active_analysis(&self, user_id: &str) -> Result<bool, AppError> {
        let mut analyses = self.analyses.lock().unwrap();
        let Some(records) = analyses.get_mut(user_id) else {
            return Ok(false);
        };
        let before = records.len();
        records.retain(|r| !r.active);
        Ok(records.len() < before)
    }

    async fn save_progress(
        &self,
        user_id: &str,
        analysis_id: Uuid,
        progress: &RoadmapProgress,
    ) -> Result<bool, AppError> {
        let mut analyses = self.analyses.lock().unwrap();
        let record = analyses.get_mut(user_id).and_then(|records| {
            records
                .iter_mut()
                .find(|r| r.active && r.analysis.id == analysis_id)
        });
        match record {
            Some(r) => {
                r.analysis.progress = progress.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Accepts `token-<user id>`; anything else is rejected. The token
/// `keys-unavailable` simulates a signing-key fetch failure.
pub struct StaticVerifier;

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<String, AuthError> {
        if token == "keys-unavailable" {
            return Err(AuthError::KeyFetch("HTTP 503".to_string()));
        }
        token
            .strip_prefix("token-")
            .filter(|uid| !uid.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AuthError::InvalidFormat("unrecognised test token".to_string()))
    }
}

pub fn test_state(llm: Arc<ScriptedCompletion>, store: Arc<MemoryStore>) -> AppState {
    AppState {
        store,
        llm,
        verifier: Arc::new(StaticVerifier),
        config: Config::for_tests(),
    }
}

pub fn sample_profile_json() -> Value {
    json!({
        "interests": ["backend"],
        "skills": {"python": "beginner"},
        "time_per_week": 10,
        "learning_pace": "medium",
        "goal": "software engineering"
    })
}

pub fn sample_profile() -> StudentProfile {
    StudentProfile::from_value(sample_profile_json()).unwrap()
}

pub fn sample_decision_json() -> Value {
    json!({
        "career": "Backend Developer",
        "reasoning": "Interest in backend work and an existing Python foundation.",
        "confidence": 78,
        "skill_match_percentage": 35,
        "market_readiness": 30,
        "industry_demand": "stable",
        "key_strengths": ["python basics", "interest in backend"],
        "skill_gaps": ["databases", "web frameworks"],
        "time_to_job_ready": "8-10 months",
        "alternatives": [
            {"career": "Data Analyst", "match_score": 65, "reason": "Python transfers to data work"},
            {"career": "DevOps Engineer", "match_score": 55, "reason": "Backend adjacent"}
        ]
    })
}

pub fn sample_roadmap_json() -> Value {
    json!({
        "duration_months": 6,
        "roadmap": [
            {
                "phase": "Months 1-3",
                "focus_skills": ["Python", "SQL"],
                "outcomes": ["Write scripts", "Query relational data"]
            },
            {
                "phase": "Months 4-6",
                "focus_skills": ["HTTP", "Docker"],
                "outcomes": ["Build a REST API", "Containerise a service"]
            }
        ]
    })
}

pub fn sample_analysis() -> Analysis {
    Analysis::new(
        sample_profile(),
        serde_json::from_value(sample_decision_json()).unwrap(),
        serde_json::from_value(sample_roadmap_json()).unwrap(),
    )
}
