//! Profile → career decision → roadmap → stored analysis.

use tracing::info;

use crate::career::decision::decide_career;
use crate::career::roadmap::generate_roadmap;
use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::models::analysis::Analysis;
use crate::models::profile::StudentProfile;
use crate::store::Store;

/// Runs both completion calls in order and persists the result.
///
/// The roadmap call needs the decided career, so the calls are sequential.
/// Nothing is written unless both succeed.
pub async fn run_analysis(
    llm: &dyn CompletionProvider,
    store: &dyn Store,
    user_id: &str,
    profile: StudentProfile,
) -> Result<Analysis, AppError> {
    info!("Starting career analysis for user {user_id}");

    let decision = decide_career(llm, &profile).await?;
    let roadmap = generate_roadmap(llm, &decision.career, &profile).await?;

    let analysis = Analysis::new(profile, decision, roadmap);
    store.save_analysis(user_id, &analysis).await?;

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        sample_decision_json, sample_profile, sample_roadmap_json, MemoryStore, ScriptedCompletion,
    };

    #[tokio::test]
    async fn test_pipeline_stores_analysis() {
        let llm = ScriptedCompletion::new([
            sample_decision_json().to_string(),
            sample_roadmap_json().to_string(),
        ]);
        let store = MemoryStore::default();

        let analysis = run_analysis(&llm, &store, "u1", sample_profile())
            .await
            .unwrap();

        let stored = store.get_active_analysis("u1").await.unwrap().unwrap();
        assert_eq!(stored, analysis);
        assert_eq!(stored.progress.total_phases, 2);

        // The roadmap call is told which career was chosen.
        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].user.contains("Backend Developer"));
    }

    #[tokio::test]
    async fn test_decision_failure_skips_roadmap_and_write() {
        let llm = ScriptedCompletion::new(["not json"]);
        let store = MemoryStore::default();

        let err = run_analysis(&llm, &store, "u1", sample_profile())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamMalformed(_)));
        assert_eq!(llm.calls().len(), 1);
        assert!(store.get_active_analysis("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_roadmap_failure_writes_nothing() {
        let llm = ScriptedCompletion::new([sample_decision_json().to_string(), "oops".to_string()]);
        let store = MemoryStore::default();

        assert!(run_analysis(&llm, &store, "u1", sample_profile())
            .await
            .is_err());
        assert!(store.get_active_analysis("u1").await.unwrap().is_none());
        assert_eq!(store.analysis_count("u1"), 0);
    }
}
