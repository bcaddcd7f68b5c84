use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::Analysis;
use crate::models::career::{CareerDecision, LearningRoadmap};
use crate::models::profile::StudentProfile;
use crate::progress::RoadmapProgress;
use crate::store::Store;

/// PostgreSQL document store: JSONB documents, one row per profile and per analysis.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProfileRow {
    profile: Json<StudentProfile>,
}

#[derive(FromRow)]
struct AnalysisRow {
    id: Uuid,
    profile: Json<StudentProfile>,
    career_decision: Json<CareerDecision>,
    roadmap: Json<LearningRoadmap>,
    progress: Json<RoadmapProgress>,
    created_at: DateTime<Utc>,
}

impl From<AnalysisRow> for Analysis {
    fn from(row: AnalysisRow) -> Self {
        Analysis {
            id: row.id,
            profile: row.profile.0,
            career_decision: row.career_decision.0,
            roadmap: row.roadmap.0,
            progress: row.progress.0,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn save_profile(&self, user_id: &str, profile: &StudentProfile) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, profile, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET profile = EXCLUDED.profile, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(Json(profile))
        .execute(&self.pool)
        .await?;

        info!("Saved profile for user {user_id}");
        Ok(())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<StudentProfile>, AppError> {
        let row: Option<ProfileRow> =
            sqlx::query_as("SELECT profile FROM profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|r| r.profile.0))
    }

    async fn save_analysis(&self, user_id: &str, analysis: &Analysis) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        // Serializes concurrent saves for one user until commit, so the later
        // writer always sees (and deactivates) the earlier writer's row.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE analyses SET active = FALSE WHERE user_id = $1 AND active")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO analyses
                (id, user_id, profile, career_decision, roadmap, progress, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7)
            "#,
        )
        .bind(analysis.id)
        .bind(user_id)
        .bind(Json(&analysis.profile))
        .bind(Json(&analysis.career_decision))
        .bind(Json(&analysis.roadmap))
        .bind(Json(&analysis.progress))
        .bind(analysis.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Saved analysis {} for user {user_id}", analysis.id);
        Ok(())
    }

    async fn get_active_analysis(&self, user_id: &str) -> Result<Option<Analysis>, AppError> {
        let row: Option<AnalysisRow> = sqlx::query_as(
            r#"
            SELECT id, profile, career_decision, roadmap, progress, created_at
            FROM analyses
            WHERE user_id = $1 AND active
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Analysis::from))
    }

    async fn delete_active_analysis(&self, user_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM analyses WHERE user_id = $1 AND active")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted active analysis for user {user_id}");
        }
        Ok(deleted)
    }

    async fn save_progress(
        &self,
        user_id: &str,
        analysis_id: Uuid,
        progress: &RoadmapProgress,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE analyses SET progress = $1 WHERE id = $2 AND user_id = $3 AND active",
        )
        .bind(Json(progress))
        .bind(analysis_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::create_pool;
    use crate::test_support::sample_analysis;

    /// Postgres-backed tests run only when `TEST_DATABASE_URL` points at a
    /// scratch database; otherwise they return early.
    async fn test_store() -> Option<PgStore> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        Some(PgStore::new(create_pool(&url).await.unwrap()))
    }

    async fn active_rows(store: &PgStore, user_id: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM analyses WHERE user_id = $1 AND active")
            .bind(user_id)
            .fetch_one(&store.pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_concurrent_saves_keep_one_active_row() {
        let Some(store) = test_store().await else {
            return;
        };
        let store = Arc::new(store);

        for round in 0..10 {
            let user_id = format!("concurrent-{}-{round}", Uuid::new_v4());
            let tasks: Vec<_> = (0..4)
                .map(|_| {
                    let store = store.clone();
                    let user_id = user_id.clone();
                    tokio::spawn(async move {
                        let analysis = sample_analysis();
                        store.save_analysis(&user_id, &analysis).await.map(|_| analysis.id)
                    })
                })
                .collect();

            let mut saved = Vec::new();
            for task in tasks {
                saved.push(task.await.unwrap().unwrap());
            }

            assert_eq!(active_rows(&store, &user_id).await, 1);
            let active = store.get_active_analysis(&user_id).await.unwrap().unwrap();
            assert!(saved.contains(&active.id));
        }
    }

    #[tokio::test]
    async fn test_later_save_supersedes_and_delete_clears() {
        let Some(store) = test_store().await else {
            return;
        };
        let user_id = format!("supersede-{}", Uuid::new_v4());

        let first = sample_analysis();
        let second = sample_analysis();

        store.save_analysis(&user_id, &first).await.unwrap();
        store.save_analysis(&user_id, &second).await.unwrap();

        let active = store.get_active_analysis(&user_id).await.unwrap().unwrap();
        assert_eq!(active.id, second.id);

        assert!(store.delete_active_analysis(&user_id).await.unwrap());
        assert!(store.get_active_analysis(&user_id).await.unwrap().is_none());
        assert!(!store.delete_active_analysis(&user_id).await.unwrap());
    }
}
