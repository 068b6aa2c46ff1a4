use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, NaiveDate, Utc};

use growup_core::model::{MenteeId, Sprint, SprintId, Task, TaskId, TaskPriority};
use storage::repository::SprintRepository;

use crate::error::SprintPlanningError;

//
// ─── COMPOSER ──────────────────────────────────────────────────────────────────
//

/// Mutable draft of a sprint, scoped to one pillar.
///
/// The draft accumulates tasks and can be built into an immutable
/// [`Sprint`] without being consumed, so a failed save keeps the draft
/// around for another attempt.
#[derive(Debug, Clone)]
pub struct SprintComposer {
    pillar_name: String,
    name: String,
    goal: String,
    tasks: Vec<Task>,
}

impl SprintComposer {
    /// Starts a draft for the given pillar with the sprint name
    /// pre-filled.
    #[must_use]
    pub fn new(pillar_name: impl Into<String>) -> Self {
        let pillar_name = pillar_name.into();
        let name = format!("Sprint de Foco em {pillar_name}");
        Self {
            pillar_name,
            name,
            goal: String::new(),
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn pillar_name(&self) -> &str {
        &self.pillar_name
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = goal.into();
    }

    /// Adds a task to the draft and returns its id.
    ///
    /// A whitespace-only title is silently ignored and returns `None`;
    /// the draft is unchanged.
    pub fn add_task(
        &mut self,
        title: &str,
        is_custom: bool,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Option<TaskId> {
        let task = Task::new(title, is_custom, priority, due_date).ok()?;
        let id = task.id();
        self.tasks.push(task);
        Some(id)
    }

    /// Removes a task from the draft; unknown ids are a no-op.
    pub fn remove_task(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id() != id);
    }

    /// Builds the immutable sprint, leaving the draft intact.
    ///
    /// # Errors
    ///
    /// Returns `SprintError` if the name or goal is blank, or no tasks
    /// were added.
    pub fn build(&self, created_at: DateTime<Utc>) -> Result<Sprint, SprintPlanningError> {
        let sprint = Sprint::new(
            SprintId::generate(),
            self.pillar_name.clone(),
            self.name.clone(),
            self.goal.clone(),
            self.tasks.clone(),
            created_at,
        )?;
        Ok(sprint)
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Persists built sprints.
///
/// The repository transactionally bumps the owning pillar's sprint and
/// task counters together with the insert. One save may be in flight at
/// a time; the caller discards the draft only after success.
pub struct SprintPlanningService {
    sprints: Arc<dyn SprintRepository>,
    in_flight: AtomicBool,
}

impl SprintPlanningService {
    #[must_use]
    pub fn new(sprints: Arc<dyn SprintRepository>) -> Self {
        Self {
            sprints,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a sprint save is currently being persisted.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Persists the sprint for the given mentee.
    ///
    /// # Errors
    ///
    /// Returns `SprintPlanningError::SubmissionInFlight` if another save
    /// has not finished yet; `StorageError::NotFound` if the mentee has
    /// no pillar with the sprint's pillar name.
    pub async fn create_sprint(
        &self,
        mentee_id: MenteeId,
        sprint: &Sprint,
    ) -> Result<(), SprintPlanningError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SprintPlanningError::SubmissionInFlight);
        }

        let result = self.sprints.insert_sprint(mentee_id, sprint).await;
        self.in_flight.store(false, Ordering::Release);
        result.map_err(SprintPlanningError::from)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
