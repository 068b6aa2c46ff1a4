use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::model::{SprintId, TaskId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SprintError {
    #[error("task title cannot be empty")]
    EmptyTaskTitle,

    #[error("sprint name cannot be empty")]
    EmptyName,

    #[error("sprint goal cannot be empty")]
    EmptyGoal,

    #[error("pillar name cannot be empty")]
    EmptyPillarName,

    #[error("a sprint needs at least one task")]
    NoTasks,

    #[error("unknown task priority: {0}")]
    UnknownPriority(String),
}

//
// ─── TASK PRIORITY ─────────────────────────────────────────────────────────────
//

/// Priority attached to a sprint task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Storage-facing identifier for this priority.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = SprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(SprintError::UnknownPriority(other.to_string())),
        }
    }
}

//
// ─── TASK ──────────────────────────────────────────────────────────────────────
//

/// A single actionable item inside a sprint. Immutable once added; a task
/// can only be removed from the draft before the sprint is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    title: String,
    is_custom: bool,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a task with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `SprintError::EmptyTaskTitle` for a blank title.
    pub fn new(
        title: impl Into<String>,
        is_custom: bool,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, SprintError> {
        Self::from_persisted(TaskId::generate(), title, is_custom, priority, due_date)
    }

    /// Rehydrate a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns `SprintError::EmptyTaskTitle` for a blank title.
    pub fn from_persisted(
        id: TaskId,
        title: impl Into<String>,
        is_custom: bool,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, SprintError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SprintError::EmptyTaskTitle);
        }
        Ok(Self {
            id,
            title: title.trim().to_owned(),
            is_custom,
            priority,
            due_date,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    #[must_use]
    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    #[must_use]
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

//
// ─── SPRINT ────────────────────────────────────────────────────────────────────
//

/// A time-boxed bundle of tasks targeting improvement of one pillar.
///
/// Created atomically: name, goal and at least one task are required up
/// front, and the sprint never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprint {
    id: SprintId,
    pillar_name: String,
    name: String,
    goal: String,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
}

impl Sprint {
    /// Creates a sprint.
    ///
    /// # Errors
    ///
    /// Returns `SprintError` if the pillar name, sprint name or goal is
    /// blank, or if the task list is empty.
    pub fn new(
        id: SprintId,
        pillar_name: impl Into<String>,
        name: impl Into<String>,
        goal: impl Into<String>,
        tasks: Vec<Task>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, SprintError> {
        let pillar_name = pillar_name.into();
        if pillar_name.trim().is_empty() {
            return Err(SprintError::EmptyPillarName);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SprintError::EmptyName);
        }
        let goal = goal.into();
        if goal.trim().is_empty() {
            return Err(SprintError::EmptyGoal);
        }
        if tasks.is_empty() {
            return Err(SprintError::NoTasks);
        }

        Ok(Self {
            id,
            pillar_name: pillar_name.trim().to_owned(),
            name: name.trim().to_owned(),
            goal: goal.trim().to_owned(),
            tasks,
            created_at,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> SprintId {
        self.id
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

    #[must_use]
    pub fn task_count(&self) -> u32 {
        u32::try_from(self.tasks.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
