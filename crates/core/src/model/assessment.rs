use thiserror::Error;

use crate::model::MaturityLevel;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when building an assessment.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("axis name cannot be empty")]
    EmptyAxisName,

    #[error("score {0} is outside the 0-5 range")]
    ScoreOutOfRange(f64),
}

//
// ─── ASSESSMENT ────────────────────────────────────────────────────────────────
//

/// Recorded outcome for one axis from one diagnosis session.
///
/// The maturity level is always derived from the score; the two can never
/// disagree. Assessments are immutable once created and are consumed once
/// to build pillar records.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    axis_id: String,
    axis_name: String,
    score: f64,
    level: MaturityLevel,
    notes: Option<String>,
}

impl Assessment {
    /// Creates an assessment for one axis, deriving the maturity level.
    ///
    /// Empty notes are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::ScoreOutOfRange` if the score is outside
    /// [0, 5], or `AssessmentError::EmptyAxisName` for a blank axis name.
    pub fn new(
        axis_id: impl Into<String>,
        axis_name: impl Into<String>,
        score: f64,
        notes: Option<String>,
    ) -> Result<Self, AssessmentError> {
        let axis_name = axis_name.into();
        if axis_name.trim().is_empty() {
            return Err(AssessmentError::EmptyAxisName);
        }
        if !score.is_finite() || !(0.0..=5.0).contains(&score) {
            return Err(AssessmentError::ScoreOutOfRange(score));
        }

        let notes = notes.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty());

        Ok(Self {
            axis_id: axis_id.into(),
            axis_name: axis_name.trim().to_owned(),
            score,
            level: MaturityLevel::from_score(score),
            notes,
        })
    }

    // Accessors
    #[must_use]
    pub fn axis_id(&self) -> &str {
        &self.axis_id
    }

    #[must_use]
    pub fn axis_name(&self) -> &str {
        &self.axis_name
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
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

//
// ─── DIAGNOSIS RESPONSE ────────────────────────────────────────────────────────
//

/// Raw answer to a single diagnosis question, kept for the pillar detail
/// view. Only the free-text wizard variant produces these.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisResponse {
    pub axis_name: String,
    pub question_text: String,
    pub response: String,
    pub score: f64,
}

impl DiagnosisResponse {
    #[must_use]
    pub fn new(
        axis_name: impl Into<String>,
        question_text: impl Into<String>,
        response: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            axis_name: axis_name.into(),
            question_text: question_text.into(),
            response: response.into(),
            score,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_derives_level_from_score() {
        let a = Assessment::new("financas", "Finanças", 3.5, None).unwrap();
        assert_eq!(a.level(), MaturityLevel::Blue);
        assert_eq!(a.level(), MaturityLevel::from_score(a.score()));
    }

    #[test]
    fn assessment_rejects_out_of_range_score() {
        let err = Assessment::new("financas", "Finanças", 5.1, None).unwrap_err();
        assert_eq!(err, AssessmentError::ScoreOutOfRange(5.1));

        let err = Assessment::new("financas", "Finanças", -0.1, None).unwrap_err();
        assert_eq!(err, AssessmentError::ScoreOutOfRange(-0.1));

        let err = Assessment::new("financas", "Finanças", f64::NAN, None).unwrap_err();
        assert!(matches!(err, AssessmentError::ScoreOutOfRange(_)));
    }

    #[test]
    fn assessment_rejects_blank_axis_name() {
        let err = Assessment::new("x", "   ", 2.0, None).unwrap_err();
        assert_eq!(err, AssessmentError::EmptyAxisName);
    }

    #[test]
    fn empty_notes_are_absent() {
        let a = Assessment::new("vendas", "Vendas", 4.0, Some("   ".into())).unwrap();
        assert_eq!(a.notes(), None);

        let a = Assessment::new("vendas", "Vendas", 4.0, Some("  sem CRM  ".into())).unwrap();
        assert_eq!(a.notes(), Some("sem CRM"));
    }

    #[test]
    fn boundary_scores_are_accepted() {
        assert!(Assessment::new("a", "A", 0.0, None).is_ok());
        assert!(Assessment::new("a", "A", 5.0, None).is_ok());
    }
}
