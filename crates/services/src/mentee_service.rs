use std::sync::Arc;

use growup_core::model::{Mentee, MenteeId, Program};
use storage::repository::MenteeRepository;

use crate::error::MenteeServiceError;

/// Read and update operations on mentee records.
///
/// Mentees are only ever created through a completed diagnosis; this
/// service covers the rest: finding who to show on launch and moving a
/// mentee between programs.
pub struct MenteeService {
    mentees: Arc<dyn MenteeRepository>,
}

impl MenteeService {
    #[must_use]
    pub fn new(mentees: Arc<dyn MenteeRepository>) -> Self {
        Self { mentees }
    }

    /// The most recently diagnosed mentee, if any.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn latest_mentee(&self) -> Result<Option<Mentee>, MenteeServiceError> {
        Ok(self.mentees.latest_mentee().await?)
    }

    /// Reassigns a mentee to another catalogued program.
    ///
    /// The catalog check happens before the storage call so an unknown
    /// program never reaches the repository.
    ///
    /// # Errors
    ///
    /// Returns `MenteeServiceError::UnknownProgram` for ids outside the
    /// catalog, or `StorageError::NotFound` for an unknown mentee.
    pub async fn change_program(
        &self,
        mentee_id: MenteeId,
        program_id: &str,
    ) -> Result<(), MenteeServiceError> {
        if Program::by_id(program_id).is_none() {
            return Err(MenteeServiceError::UnknownProgram(program_id.to_string()));
        }
        self.mentees.update_program(mentee_id, program_id).await?;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use growup_core::time::fixed_now;
    use storage::repository::{Storage, StorageError};

    async fn seeded(storage: &Storage, name: &str) -> Mentee {
        let mentee = Mentee::new(MenteeId::generate(), name, "prog-start", fixed_now()).unwrap();
        storage.mentees.insert_mentee(&mentee).await.unwrap();
        mentee
    }

    #[tokio::test]
    async fn latest_mentee_is_none_on_fresh_storage() {
        let storage = Storage::in_memory();
        let service = MenteeService::new(Arc::clone(&storage.mentees));
        assert!(service.latest_mentee().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn latest_mentee_returns_most_recent() {
        let storage = Storage::in_memory();
        let service = MenteeService::new(Arc::clone(&storage.mentees));
        seeded(&storage, "Ana").await;
        seeded(&storage, "Bruno").await;

        let latest = service.latest_mentee().await.unwrap().unwrap();
        assert_eq!(latest.name(), "Bruno");
    }

    #[tokio::test]
    async fn change_program_validates_before_storage() {
        let storage = Storage::in_memory();
        let service = MenteeService::new(Arc::clone(&storage.mentees));
        let mentee = seeded(&storage, "Ana").await;

        let err = service
            .change_program(mentee.id(), "prog-nope")
            .await
            .unwrap_err();
        assert!(matches!(err, MenteeServiceError::UnknownProgram(_)));

        service
            .change_program(mentee.id(), "prog-hibrido")
            .await
            .unwrap();
        let latest = service.latest_mentee().await.unwrap().unwrap();
        assert_eq!(latest.program_id(), "prog-hibrido");
    }

    #[tokio::test]
    async fn change_program_for_unknown_mentee_is_not_found() {
        let storage = Storage::in_memory();
        let service = MenteeService::new(Arc::clone(&storage.mentees));

        let err = service
            .change_program(MenteeId::generate(), "prog-start")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MenteeServiceError::Storage(StorageError::NotFound)
        ));
    }
}
