use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::dashboard::DashboardService;
use crate::diagnosis::DiagnosisService;
use crate::error::AppServicesError;
use crate::mentee_service::MenteeService;
use crate::sprint_planner::SprintPlanningService;

/// Assembles the app-facing services over shared repository handles.
#[derive(Clone)]
pub struct AppServices {
    diagnosis: Arc<DiagnosisService>,
    dashboard: Arc<DashboardService>,
    sprint_planning: Arc<SprintPlanningService>,
    mentee_service: Arc<MenteeService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or
    /// migrated.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    /// Wire services over an existing storage bundle.
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let diagnosis = Arc::new(DiagnosisService::new(
            clock,
            Arc::clone(&storage.mentees),
            Arc::clone(&storage.pillars),
            Arc::clone(&storage.responses),
        ));
        let dashboard = Arc::new(DashboardService::new(Arc::clone(&storage.pillars)));
        let sprint_planning = Arc::new(SprintPlanningService::new(Arc::clone(&storage.sprints)));
        let mentee_service = Arc::new(MenteeService::new(Arc::clone(&storage.mentees)));

        Self {
            diagnosis,
            dashboard,
            sprint_planning,
            mentee_service,
        }
    }

    #[must_use]
    pub fn diagnosis(&self) -> Arc<DiagnosisService> {
        Arc::clone(&self.diagnosis)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn sprint_planning(&self) -> Arc<SprintPlanningService> {
        Arc::clone(&self.sprint_planning)
    }

    #[must_use]
    pub fn mentee_service(&self) -> Arc<MenteeService> {
        Arc::clone(&self.mentee_service)
    }
}
