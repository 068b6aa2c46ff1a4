use std::sync::Arc;

use serde::Serialize;

use growup_core::model::{MenteeId, Pillar};
use storage::repository::PillarRepository;

use crate::error::DashboardError;

//
// ─── METRICS ───────────────────────────────────────────────────────────────────
//

/// Aggregate counters shown on the dashboard header cards.
///
/// Always re-derived from the pillar list, never kept as running
/// counters, so recomputing after any write yields the same numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub active_sprints: u32,
    /// Completed share of all tasks, rounded to a whole percent.
    pub overall_progress: u32,
}

impl DashboardMetrics {
    /// Aggregates the counters over a mentee's pillars.
    ///
    /// An empty slice or a mentee with no tasks yet yields all zeros;
    /// the progress ratio never divides by zero.
    #[must_use]
    pub fn from_pillars(pillars: &[Pillar]) -> Self {
        let total_tasks: u32 = pillars.iter().map(Pillar::tasks_total).sum();
        let completed_tasks: u32 = pillars.iter().map(Pillar::tasks_completed).sum();
        let active_sprints: u32 = pillars.iter().map(Pillar::sprints).sum();

        let overall_progress = if total_tasks == 0 {
            0
        } else {
            let ratio = f64::from(completed_tasks) / f64::from(total_tasks);
            (ratio * 100.0).round() as u32
        };

        Self {
            total_tasks,
            completed_tasks,
            active_sprints,
            overall_progress,
        }
    }
}

/// Pillars and their aggregate metrics, loaded together for one mentee.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub pillars: Vec<Pillar>,
    pub metrics: DashboardMetrics,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Read side of the dashboard: loads a mentee's pillars and derives the
/// header metrics from them.
pub struct DashboardService {
    pillars: Arc<dyn PillarRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(pillars: Arc<dyn PillarRepository>) -> Self {
        Self { pillars }
    }

    /// Loads the pillar list (catalog order) and its aggregate metrics.
    ///
    /// # Errors
    ///
    /// Propagates repository failures as `DashboardError::Storage`.
    pub async fn overview(&self, mentee_id: MenteeId) -> Result<DashboardOverview, DashboardError> {
        let pillars = self.pillars.list_pillars(mentee_id).await?;
        let metrics = DashboardMetrics::from_pillars(&pillars);
        Ok(DashboardOverview { pillars, metrics })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
