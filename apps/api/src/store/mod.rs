//! Persistence gateway. Every document is keyed by the verified user id;
//! handlers never see another user's records.
//!
//! Active-roadmap semantics are append plus most-recent-wins: each saved
//! analysis is a new record and supersedes the previous active one, which is
//! kept as inactive history. Deleting removes only the active record.

pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::Analysis;
use crate::models::profile::StudentProfile;
use crate::progress::RoadmapProgress;

#[async_trait]
pub trait Store: Send + Sync {
    /// Overwrites the user's profile.
    async fn save_profile(&self, user_id: &str, profile: &StudentProfile) -> Result<(), AppError>;

    async fn get_profile(&self, user_id: &str) -> Result<Option<StudentProfile>, AppError>;

    /// Stores `analysis` as the user's active analysis.
    async fn save_analysis(&self, user_id: &str, analysis: &Analysis) -> Result<(), AppError>;

    async fn get_active_analysis(&self, user_id: &str) -> Result<Option<Analysis>, AppError>;

    /// Removes the active analysis. Returns false when there was none.
    async fn delete_active_analysis(&self, user_id: &str) -> Result<bool, AppError>;

    /// Replaces progress on the given analysis if it is still the active one.
    /// Returns false when it is not.
    async fn save_progress(
        &self,
        user_id: &str,
        analysis_id: Uuid,
        progress: &RoadmapProgress,
    ) -> Result<bool, AppError>;
}
