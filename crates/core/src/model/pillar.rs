use thiserror::Error;

use crate::model::{Assessment, MaturityLevel};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PillarError {
    #[error("pillar name cannot be empty")]
    EmptyName,

    #[error("score {0} is outside the 0-5 range")]
    ScoreOutOfRange(f64),

    #[error("tasks completed ({completed}) exceeds tasks total ({total})")]
    CompletedExceedsTotal { completed: u32, total: u32 },
}

//
// ─── PILLAR ────────────────────────────────────────────────────────────────────
//

/// One business-maturity dimension on the dashboard.
///
/// Created from a persisted assessment on load. The maturity level is
/// always the value derived from the score; the only mutations are the
/// sprint/task counters, never the diagnosis result itself (a new
/// diagnosis is a fresh mentee record, not an update-in-place).
#[derive(Debug, Clone, PartialEq)]
pub struct Pillar {
    name: String,
    score: f64,
    level: MaturityLevel,
    sprints: u32,
    tasks_completed: u32,
    tasks_total: u32,
    findings: Option<String>,
}

impl Pillar {
    /// Creates a fresh pillar from a diagnosis assessment, with zeroed
    /// sprint and task counters.
    #[must_use]
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            name: assessment.axis_name().to_owned(),
            score: assessment.score(),
            level: assessment.level(),
            sprints: 0,
            tasks_completed: 0,
            tasks_total: 0,
            findings: assessment.notes().map(ToOwned::to_owned),
        }
    }

    /// Rehydrate a pillar from persisted storage.
    ///
    /// The level is re-derived from the score rather than trusted from the
    /// row, so the score/level invariant holds even against hand-edited
    /// data.
    ///
    /// # Errors
    ///
    /// Returns `PillarError` if the name is blank, the score is outside
    /// [0, 5], or the task counters are inconsistent.
    pub fn from_persisted(
        name: impl Into<String>,
        score: f64,
        sprints: u32,
        tasks_completed: u32,
        tasks_total: u32,
        findings: Option<String>,
    ) -> Result<Self, PillarError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PillarError::EmptyName);
        }
        if !score.is_finite() || !(0.0..=5.0).contains(&score) {
            return Err(PillarError::ScoreOutOfRange(score));
        }
        if tasks_completed > tasks_total {
            return Err(PillarError::CompletedExceedsTotal {
                completed: tasks_completed,
                total: tasks_total,
            });
        }

        Ok(Self {
            name: name.trim().to_owned(),
            score,
            level: MaturityLevel::from_score(score),
            sprints,
            tasks_completed,
            tasks_total,
            findings: findings.filter(|f| !f.trim().is_empty()),
        })
    }

    /// Records a newly created sprint against this pillar.
    ///
    /// Increments the sprint counter and adds the sprint's tasks to the
    /// total.
    pub fn record_sprint(&mut self, task_count: u32) {
        self.sprints = self.sprints.saturating_add(1);
        self.tasks_total = self.tasks_total.saturating_add(task_count);
    }

    /// Marks up to `count` tasks as completed, clamped to the total.
    pub fn complete_tasks(&mut self, count: u32) {
        self.tasks_completed = self
            .tasks_completed
            .saturating_add(count)
            .min(self.tasks_total);
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> MaturityLevel {
        self.level
    }

    #[must_use]
    pub fn sprints(&self) -> u32 {
        self.sprints
    }

    #[must_use]
    pub fn tasks_completed(&self) -> u32 {
        self.tasks_completed
    }

    #[must_use]
    pub fn tasks_total(&self) -> u32 {
        self.tasks_total
    }

    #[must_use]
    pub fn findings(&self) -> Option<&str> {
        self.findings.as_deref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn pillar(score: f64) -> Pillar {
        let assessment = Assessment::new("financas", "Finanças", score, None).unwrap();
        Pillar::from_assessment(&assessment)
    }

    #[test]
    fn from_assessment_starts_with_zero_counters() {
        let p = pillar(2.5);
        assert_eq!(p.name(), "Finanças");
        assert_eq!(p.level(), MaturityLevel::Yellow);
        assert_eq!(p.sprints(), 0);
        assert_eq!(p.tasks_completed(), 0);
        assert_eq!(p.tasks_total(), 0);
    }

    #[test]
    fn from_persisted_rederives_level() {
        let p = Pillar::from_persisted("Vendas", 4.2, 1, 3, 10, None).unwrap();
        assert_eq!(p.level(), MaturityLevel::Green);
        assert_eq!(p.level(), MaturityLevel::from_score(p.score()));
    }

    #[test]
    fn from_persisted_rejects_inconsistent_counters() {
        let err = Pillar::from_persisted("Vendas", 4.2, 1, 11, 10, None).unwrap_err();
        assert_eq!(
            err,
            PillarError::CompletedExceedsTotal {
                completed: 11,
                total: 10
            }
        );
    }

    #[test]
    fn from_persisted_rejects_bad_score() {
        let err = Pillar::from_persisted("Vendas", 6.0, 0, 0, 0, None).unwrap_err();
        assert_eq!(err, PillarError::ScoreOutOfRange(6.0));
    }

    #[test]
    fn record_sprint_bumps_counters() {
        let mut p = pillar(3.0);
        p.record_sprint(4);
        p.record_sprint(2);
        assert_eq!(p.sprints(), 2);
        assert_eq!(p.tasks_total(), 6);
        assert_eq!(p.tasks_completed(), 0);
    }

    #[test]
    fn complete_tasks_clamps_to_total() {
        let mut p = pillar(3.0);
        p.record_sprint(3);
        p.complete_tasks(2);
        assert_eq!(p.tasks_completed(), 2);
        p.complete_tasks(5);
        assert_eq!(p.tasks_completed(), 3);
    }

    #[test]
    fn blank_findings_are_absent() {
        let p = Pillar::from_persisted("Vendas", 4.0, 0, 0, 0, Some("  ".into())).unwrap();
        assert_eq!(p.findings(), None);
    }
}
