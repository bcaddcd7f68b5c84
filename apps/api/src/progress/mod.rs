//! Roadmap progress tracking: per-phase completion plus a daily activity streak.

pub mod handlers;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    #[default]
    Pending,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapProgress {
    pub phase_status: Vec<PhaseStatus>,
    pub completed_phases: usize,
    pub total_phases: usize,
    pub streak_days: u32,
    pub last_activity_date: Option<NaiveDate>,
}

impl RoadmapProgress {
    /// Fresh progress for a roadmap with `total_phases` phases, all pending.
    pub fn new(total_phases: usize) -> Self {
        Self {
            phase_status: vec![PhaseStatus::Pending; total_phases],
            completed_phases: 0,
            total_phases,
            streak_days: 0,
            last_activity_date: None,
        }
    }

    /// Sets the status of one phase and records activity for `today`.
    pub fn apply(
        &mut self,
        phase_index: usize,
        status: PhaseStatus,
        today: NaiveDate,
    ) -> Result<(), AppError> {
        let slot = self.phase_status.get_mut(phase_index).ok_or_else(|| {
            AppError::Validation(format!(
                "phase_index {phase_index} out of range (roadmap has {} phases)",
                self.total_phases
            ))
        })?;
        *slot = status;

        self.completed_phases = self
            .phase_status
            .iter()
            .filter(|s| **s == PhaseStatus::Completed)
            .count();
        self.record_activity(today);
        Ok(())
    }

    fn record_activity(&mut self, today: NaiveDate) {
        self.streak_days = match self.last_activity_date {
            Some(last) if last == today => self.streak_days.max(1),
            Some(last) if last.succ_opt() == Some(today) => self.streak_days + 1,
            _ => 1,
        };
        self.last_activity_date = Some(today);
    }

    pub fn percent_complete(&self) -> u32 {
        if self.total_phases == 0 {
            return 0;
        }
        (self.completed_phases * 100 / self.total_phases) as u32
    }
}
