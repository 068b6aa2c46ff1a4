//! Shared error types for the services crate.

use thiserror::Error;

use growup_core::model::{AssessmentError, MenteeError, SprintError};
use growup_core::scoring::ScoringError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the diagnosis wizard and `DiagnosisService`.
///
/// Validation variants leave the wizard state unchanged; storage variants
/// leave the completed outcome intact so the submission can be retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiagnosisError {
    #[error("mentee name cannot be empty")]
    EmptyName,
    #[error("unknown program id: {0}")]
    UnknownProgram(String),
    #[error("operation is not valid in the current wizard step")]
    UnexpectedStep,
    #[error("already at the first question")]
    AtFirstPrompt,
    #[error("diagnosis is not complete yet")]
    Incomplete,
    #[error("another diagnosis submission is already in flight")]
    SubmissionInFlight,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Mentee(#[from] MenteeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the sprint composer and `SprintPlanningService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SprintPlanningError {
    #[error("another sprint submission is already in flight")]
    SubmissionInFlight,
    #[error(transparent)]
    Sprint(#[from] SprintError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `MenteeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MenteeServiceError {
    #[error("unknown program id: {0}")]
    UnknownProgram(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
