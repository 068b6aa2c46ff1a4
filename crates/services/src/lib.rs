#![forbid(unsafe_code)]

pub mod app_services;
pub mod dashboard;
pub mod diagnosis;
pub mod error;
pub mod mentee_service;
pub mod sprint_planner;

pub use growup_core::Clock;

pub use app_services::AppServices;
pub use dashboard::{DashboardMetrics, DashboardOverview, DashboardService};
pub use diagnosis::{
    DiagnosisOutcome, DiagnosisService, DiagnosisWizard, WizardMode, WizardProgress, WizardPrompt,
    WizardStep,
};
pub use error::{
    AppServicesError, DashboardError, DiagnosisError, MenteeServiceError, SprintPlanningError,
};
pub use mentee_service::MenteeService;
pub use sprint_planner::{SprintComposer, SprintPlanningService};
