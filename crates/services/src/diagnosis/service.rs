use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use growup_core::Clock;
use growup_core::model::{Mentee, MenteeId};
use storage::repository::{MenteeRepository, PillarRepository, ResponseRepository};

use super::wizard::DiagnosisOutcome;
use crate::error::DiagnosisError;

/// Persists completed diagnoses.
///
/// The service is the write path between a finished wizard and storage:
/// it creates the mentee record, writes one pillar per assessment in
/// catalog order and, for the free-text variant, the raw per-question
/// responses. A single submission may be in flight at a time; concurrent
/// calls fail fast instead of double-writing.
pub struct DiagnosisService {
    clock: Clock,
    mentees: Arc<dyn MenteeRepository>,
    pillars: Arc<dyn PillarRepository>,
    responses: Arc<dyn ResponseRepository>,
    in_flight: AtomicBool,
}

impl DiagnosisService {
    #[must_use]
    pub fn new(
        clock: Clock,
        mentees: Arc<dyn MenteeRepository>,
        pillars: Arc<dyn PillarRepository>,
        responses: Arc<dyn ResponseRepository>,
    ) -> Self {
        Self {
            clock,
            mentees,
            pillars,
            responses,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently being persisted.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Persists a completed diagnosis and returns the created mentee.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosisError::SubmissionInFlight` if another submission
    /// has not finished yet, or propagates validation and storage errors.
    /// On storage failure the caller keeps the outcome and may retry.
    pub async fn submit(&self, outcome: &DiagnosisOutcome) -> Result<Mentee, DiagnosisError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(DiagnosisError::SubmissionInFlight);
        }

        let result = self.persist(outcome).await;
        self.in_flight.store(false, Ordering::Release);
        result
    }

    async fn persist(&self, outcome: &DiagnosisOutcome) -> Result<Mentee, DiagnosisError> {
        let mentee = Mentee::new(
            MenteeId::generate(),
            outcome.mentee_name(),
            outcome.program_id(),
            self.clock.now(),
        )?;

        self.mentees.insert_mentee(&mentee).await?;
        if let Err(err) = self.write_diagnosis(&mentee, outcome).await {
            // The mentee row must not outlive a failed diagnosis write,
            // otherwise the read path surfaces a mentee with no pillars
            // and a retry duplicates it. The write error is the one the
            // caller acts on.
            let _ = self.mentees.delete_mentee(mentee.id()).await;
            return Err(err);
        }

        Ok(mentee)
    }

    async fn write_diagnosis(
        &self,
        mentee: &Mentee,
        outcome: &DiagnosisOutcome,
    ) -> Result<(), DiagnosisError> {
        self.pillars
            .insert_pillars(mentee.id(), outcome.assessments())
            .await?;
        if !outcome.responses().is_empty() {
            self.responses
                .insert_responses(mentee.id(), outcome.responses())
                .await?;
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
