use thiserror::Error;

use crate::model::{AssessmentError, MenteeError, PillarError, SprintError};
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Pillar(#[from] PillarError),
    #[error(transparent)]
    Sprint(#[from] SprintError),
    #[error(transparent)]
    Mentee(#[from] MenteeError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
