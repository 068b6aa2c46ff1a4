use async_trait::async_trait;
use growup_core::model::{Assessment, DiagnosisResponse, Mentee, MenteeId, Pillar, Sprint};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for mentee records.
///
/// A completed diagnosis always creates a fresh mentee; there is no
/// update-in-place of diagnosis results.
#[async_trait]
pub trait MenteeRepository: Send + Sync {
    /// Persist a newly created mentee.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id already exists, or other
    /// storage errors.
    async fn insert_mentee(&self, mentee: &Mentee) -> Result<(), StorageError>;

    /// Fetch the most recently created mentee, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn latest_mentee(&self) -> Result<Option<Mentee>, StorageError>;

    /// Reassign a mentee to another program.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the mentee does not exist.
    async fn update_program(&self, id: MenteeId, program_id: &str) -> Result<(), StorageError>;

    /// Remove a mentee and everything attached to it (pillars, responses,
    /// sprints). Idempotent: deleting an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn delete_mentee(&self, id: MenteeId) -> Result<(), StorageError>;
}

/// Repository contract for the per-mentee pillar records.
#[async_trait]
pub trait PillarRepository: Send + Sync {
    /// Persist the pillar records derived from a diagnosis, in catalog
    /// order, with zeroed sprint/task counters.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any pillar cannot be stored.
    async fn insert_pillars(
        &self,
        mentee_id: MenteeId,
        assessments: &[Assessment],
    ) -> Result<(), StorageError>;

    /// Fetch a mentee's pillars in the order they were assessed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_pillars(&self, mentee_id: MenteeId) -> Result<Vec<Pillar>, StorageError>;
}

/// Repository contract for raw per-question diagnosis responses.
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Persist the raw question responses of a diagnosis session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the responses cannot be stored.
    async fn insert_responses(
        &self,
        mentee_id: MenteeId,
        responses: &[DiagnosisResponse],
    ) -> Result<(), StorageError>;

    /// Fetch the responses recorded for one axis of a mentee's diagnosis.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_responses(
        &self,
        mentee_id: MenteeId,
        axis_name: &str,
    ) -> Result<Vec<DiagnosisResponse>, StorageError>;
}

/// Repository contract for sprints.
#[async_trait]
pub trait SprintRepository: Send + Sync {
    /// Persist a sprint and atomically bump the owning pillar's counters
    /// (`sprints + 1`, `tasks_total + task_count`).
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the owning pillar row is
    /// missing, or other storage errors.
    async fn insert_sprint(&self, mentee_id: MenteeId, sprint: &Sprint)
    -> Result<(), StorageError>;

    /// Fetch the sprints created for one pillar of a mentee.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failures.
    async fn list_sprints(
        &self,
        mentee_id: MenteeId,
        pillar_name: &str,
    ) -> Result<Vec<Sprint>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    mentees: Arc<Mutex<Vec<Mentee>>>,
    pillars: Arc<Mutex<HashMap<MenteeId, Vec<Pillar>>>>,
    responses: Arc<Mutex<HashMap<MenteeId, Vec<DiagnosisResponse>>>>,
    sprints: Arc<Mutex<HashMap<MenteeId, Vec<Sprint>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl MenteeRepository for InMemoryRepository {
    async fn insert_mentee(&self, mentee: &Mentee) -> Result<(), StorageError> {
        let mut guard = self.mentees.lock().map_err(lock_err)?;
        if guard.iter().any(|m| m.id() == mentee.id()) {
            return Err(StorageError::Conflict);
        }
        guard.push(mentee.clone());
        Ok(())
    }

    async fn latest_mentee(&self) -> Result<Option<Mentee>, StorageError> {
        let guard = self.mentees.lock().map_err(lock_err)?;
        Ok(guard.last().cloned())
    }

    async fn update_program(&self, id: MenteeId, program_id: &str) -> Result<(), StorageError> {
        let mut guard = self.mentees.lock().map_err(lock_err)?;
        let mentee = guard
            .iter_mut()
            .find(|m| m.id() == id)
            .ok_or(StorageError::NotFound)?;
        mentee
            .change_program(program_id)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(())
    }

    async fn delete_mentee(&self, id: MenteeId) -> Result<(), StorageError> {
        self.mentees
            .lock()
            .map_err(lock_err)?
            .retain(|m| m.id() != id);
        self.pillars.lock().map_err(lock_err)?.remove(&id);
        self.responses.lock().map_err(lock_err)?.remove(&id);
        self.sprints.lock().map_err(lock_err)?.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PillarRepository for InMemoryRepository {
    async fn insert_pillars(
        &self,
        mentee_id: MenteeId,
        assessments: &[Assessment],
    ) -> Result<(), StorageError> {
        let mut guard = self.pillars.lock().map_err(lock_err)?;
        if guard.contains_key(&mentee_id) {
            return Err(StorageError::Conflict);
        }
        let pillars = assessments.iter().map(Pillar::from_assessment).collect();
        guard.insert(mentee_id, pillars);
        Ok(())
    }

    async fn list_pillars(&self, mentee_id: MenteeId) -> Result<Vec<Pillar>, StorageError> {
        let guard = self.pillars.lock().map_err(lock_err)?;
        Ok(guard.get(&mentee_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ResponseRepository for InMemoryRepository {
    async fn insert_responses(
        &self,
        mentee_id: MenteeId,
        responses: &[DiagnosisResponse],
    ) -> Result<(), StorageError> {
        let mut guard = self.responses.lock().map_err(lock_err)?;
        guard
            .entry(mentee_id)
            .or_default()
            .extend(responses.iter().cloned());
        Ok(())
    }

    async fn list_responses(
        &self,
        mentee_id: MenteeId,
        axis_name: &str,
    ) -> Result<Vec<DiagnosisResponse>, StorageError> {
        let guard = self.responses.lock().map_err(lock_err)?;
        Ok(guard
            .get(&mentee_id)
            .map(|all| {
                all.iter()
                    .filter(|r| r.axis_name == axis_name)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl SprintRepository for InMemoryRepository {
    async fn insert_sprint(
        &self,
        mentee_id: MenteeId,
        sprint: &Sprint,
    ) -> Result<(), StorageError> {
        // Counter update and sprint append happen under the pillar lock so
        // a failed lookup leaves nothing behind.
        let mut pillar_guard = self.pillars.lock().map_err(lock_err)?;
        let pillars = pillar_guard
            .get_mut(&mentee_id)
            .ok_or(StorageError::NotFound)?;
        let pillar = pillars
            .iter_mut()
            .find(|p| p.name() == sprint.pillar_name())
            .ok_or(StorageError::NotFound)?;
        pillar.record_sprint(sprint.task_count());

        let mut sprint_guard = self.sprints.lock().map_err(lock_err)?;
        sprint_guard
            .entry(mentee_id)
            .or_default()
            .push(sprint.clone());
        Ok(())
    }

    async fn list_sprints(
        &self,
        mentee_id: MenteeId,
        pillar_name: &str,
    ) -> Result<Vec<Sprint>, StorageError> {
        let guard = self.sprints.lock().map_err(lock_err)?;
        Ok(guard
            .get(&mentee_id)
            .map(|all| {
                all.iter()
                    .filter(|s| s.pillar_name() == pillar_name)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub mentees: Arc<dyn MenteeRepository>,
    pub pillars: Arc<dyn PillarRepository>,
    pub responses: Arc<dyn ResponseRepository>,
    pub sprints: Arc<dyn SprintRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let mentees: Arc<dyn MenteeRepository> = Arc::new(repo.clone());
        let pillars: Arc<dyn PillarRepository> = Arc::new(repo.clone());
        let responses: Arc<dyn ResponseRepository> = Arc::new(repo.clone());
        let sprints: Arc<dyn SprintRepository> = Arc::new(repo);
        Self {
            mentees,
            pillars,
            responses,
            sprints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growup_core::model::{SprintId, Task, TaskPriority};
    use growup_core::time::fixed_now;

    fn mentee(name: &str) -> Mentee {
        Mentee::new(MenteeId::generate(), name, "prog-start", fixed_now()).unwrap()
    }

    fn assessments() -> Vec<Assessment> {
        vec![
            Assessment::new("financas", "Finanças", 1.5, None).unwrap(),
            Assessment::new("vendas", "Vendas", 4.0, None).unwrap(),
        ]
    }

    #[tokio::test]
    async fn latest_mentee_is_last_inserted() {
        let repo = InMemoryRepository::new();
        assert!(repo.latest_mentee().await.unwrap().is_none());

        let first = mentee("Ana");
        let second = mentee("Bruno");
        repo.insert_mentee(&first).await.unwrap();
        repo.insert_mentee(&second).await.unwrap();

        let latest = repo.latest_mentee().await.unwrap().unwrap();
        assert_eq!(latest.name(), "Bruno");
    }

    #[tokio::test]
    async fn duplicate_mentee_conflicts() {
        let repo = InMemoryRepository::new();
        let m = mentee("Ana");
        repo.insert_mentee(&m).await.unwrap();
        let err = repo.insert_mentee(&m).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict));
    }

    #[tokio::test]
    async fn pillars_roundtrip_in_order() {
        let repo = InMemoryRepository::new();
        let m = mentee("Ana");
        repo.insert_mentee(&m).await.unwrap();
        repo.insert_pillars(m.id(), &assessments()).await.unwrap();

        let pillars = repo.list_pillars(m.id()).await.unwrap();
        assert_eq!(pillars.len(), 2);
        assert_eq!(pillars[0].name(), "Finanças");
        assert_eq!(pillars[1].name(), "Vendas");
        assert_eq!(pillars[0].sprints(), 0);
    }

    #[tokio::test]
    async fn insert_sprint_bumps_pillar_counters() {
        let repo = InMemoryRepository::new();
        let m = mentee("Ana");
        repo.insert_mentee(&m).await.unwrap();
        repo.insert_pillars(m.id(), &assessments()).await.unwrap();

        let tasks = vec![
            Task::new("Mapear funil", true, TaskPriority::High, None).unwrap(),
            Task::new("Definir metas", true, TaskPriority::Medium, None).unwrap(),
        ];
        let sprint = Sprint::new(
            SprintId::generate(),
            "Vendas",
            "Sprint de Foco em Vendas",
            "Estruturar o funil",
            tasks,
            fixed_now(),
        )
        .unwrap();
        repo.insert_sprint(m.id(), &sprint).await.unwrap();

        let pillars = repo.list_pillars(m.id()).await.unwrap();
        let vendas = pillars.iter().find(|p| p.name() == "Vendas").unwrap();
        assert_eq!(vendas.sprints(), 1);
        assert_eq!(vendas.tasks_total(), 2);

        let stored = repo.list_sprints(m.id(), "Vendas").await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].task_count(), 2);
    }

    #[tokio::test]
    async fn sprint_for_unknown_pillar_is_not_found() {
        let repo = InMemoryRepository::new();
        let m = mentee("Ana");
        repo.insert_mentee(&m).await.unwrap();
        repo.insert_pillars(m.id(), &assessments()).await.unwrap();

        let sprint = Sprint::new(
            SprintId::generate(),
            "Marketing",
            "Sprint",
            "Meta",
            vec![Task::new("T", true, TaskPriority::Low, None).unwrap()],
            fixed_now(),
        )
        .unwrap();
        let err = repo.insert_sprint(m.id(), &sprint).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
        assert!(repo.list_sprints(m.id(), "Marketing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_mentee_removes_everything_and_is_idempotent() {
        let repo = InMemoryRepository::new();
        let m = mentee("Ana");
        repo.insert_mentee(&m).await.unwrap();
        repo.insert_pillars(m.id(), &assessments()).await.unwrap();
        let responses = vec![DiagnosisResponse::new("Vendas", "Possui funil?", "Sim", 4.0)];
        repo.insert_responses(m.id(), &responses).await.unwrap();

        repo.delete_mentee(m.id()).await.unwrap();
        assert!(repo.latest_mentee().await.unwrap().is_none());
        assert!(repo.list_pillars(m.id()).await.unwrap().is_empty());
        assert!(repo.list_responses(m.id(), "Vendas").await.unwrap().is_empty());

        // Deleting again, or an id never stored, is fine.
        repo.delete_mentee(m.id()).await.unwrap();
        repo.delete_mentee(MenteeId::generate()).await.unwrap();
    }

    #[tokio::test]
    async fn update_program_rejects_unknown_mentee() {
        let repo = InMemoryRepository::new();
        let err = repo
            .update_program(MenteeId::generate(), "prog-exclusive")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn responses_filter_by_axis() {
        let repo = InMemoryRepository::new();
        let m = mentee("Ana");
        let responses = vec![
            DiagnosisResponse::new("Finanças", "Possui controle?", "Não", 1.0),
            DiagnosisResponse::new("Vendas", "Possui funil?", "Sim", 4.0),
        ];
        repo.insert_responses(m.id(), &responses).await.unwrap();

        let financas = repo.list_responses(m.id(), "Finanças").await.unwrap();
        assert_eq!(financas.len(), 1);
        assert_eq!(financas[0].response, "Não");
    }
}
