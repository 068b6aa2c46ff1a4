use growup_core::model::{
    Assessment, Axis, DEFAULT_PROGRAM_ID, DIAGNOSIS_AXES, DiagnosisResponse, Program,
};
use growup_core::scoring::ScoringStrategy;

use super::progress::WizardProgress;
use crate::error::DiagnosisError;

//
// ─── STEPS ─────────────────────────────────────────────────────────────────────
//

/// Traversal granularity of the assessment phase.
///
/// The two observed diagnosis variants are mutually exclusive UI flows but
/// share one state machine: either one score per axis (slider) or one
/// free-text answer per catalog question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    AxisScore,
    QuestionResponse,
}

/// Current position in the diagnosis flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CollectingName,
    SelectingProgram,
    Assessing { axis: usize, question: usize },
    Complete,
}

/// What the UI should ask right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardPrompt {
    pub axis_name: &'static str,
    pub question_text: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
struct AnswerEntry {
    axis: usize,
    question: usize,
    raw: String,
    score: f64,
}

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// Everything a completed diagnosis hands off, atomically, to the
/// persistence layer: one assessment per axis in catalog order, plus the
/// raw per-question responses when the free-text variant was used.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisOutcome {
    mentee_name: String,
    program_id: String,
    assessments: Vec<Assessment>,
    responses: Vec<DiagnosisResponse>,
}

impl DiagnosisOutcome {
    #[must_use]
    pub fn mentee_name(&self) -> &str {
        &self.mentee_name
    }

    #[must_use]
    pub fn program_id(&self) -> &str {
        &self.program_id
    }

    #[must_use]
    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    #[must_use]
    pub fn responses(&self) -> &[DiagnosisResponse] {
        &self.responses
    }
}

//
// ─── WIZARD ────────────────────────────────────────────────────────────────────
//

/// Single-pass diagnosis wizard.
///
/// Walks name → program → per-axis (or per-question) assessment in the
/// fixed catalog order, accumulating answers. Validation failures leave
/// the state untouched; back-navigation pops exactly one answer for
/// re-editing. The accumulated assessments are only observable through
/// [`DiagnosisWizard::into_outcome`] once the walk is complete.
pub struct DiagnosisWizard<S> {
    scoring: S,
    mode: WizardMode,
    step: WizardStep,
    mentee_name: String,
    program_id: String,
    entries: Vec<AnswerEntry>,
}

impl<S: ScoringStrategy> DiagnosisWizard<S> {
    /// Creates a wizard with the given scoring strategy and traversal mode.
    #[must_use]
    pub fn new(scoring: S, mode: WizardMode) -> Self {
        Self {
            scoring,
            mode,
            step: WizardStep::CollectingName,
            mentee_name: String::new(),
            program_id: DEFAULT_PROGRAM_ID.to_string(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    /// The pre-selected (or chosen) program id.
    #[must_use]
    pub fn program_id(&self) -> &str {
        &self.program_id
    }

    /// The prompt to show for the current assessment position, if any.
    #[must_use]
    pub fn current_prompt(&self) -> Option<WizardPrompt> {
        let WizardStep::Assessing { axis, question } = self.step else {
            return None;
        };
        let axis = DIAGNOSIS_AXES.get(axis)?;
        let question_text = match self.mode {
            WizardMode::AxisScore => None,
            WizardMode::QuestionResponse => Some(axis.questions.get(question)?.text),
        };
        Some(WizardPrompt {
            axis_name: axis.name,
            question_text,
        })
    }

    /// Accepts the mentee's name and moves on to program selection.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosisError::EmptyName` for blank input (state
    /// unchanged) or `UnexpectedStep` outside the name step.
    pub fn submit_name(&mut self, name: &str) -> Result<(), DiagnosisError> {
        if self.step != WizardStep::CollectingName {
            return Err(DiagnosisError::UnexpectedStep);
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DiagnosisError::EmptyName);
        }
        self.mentee_name = trimmed.to_owned();
        self.step = WizardStep::SelectingProgram;
        Ok(())
    }

    /// Confirms the program selection and starts the assessment walk.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosisError::UnknownProgram` for ids outside the
    /// catalog, or `UnexpectedStep` outside the program step.
    pub fn select_program(&mut self, program_id: &str) -> Result<(), DiagnosisError> {
        if self.step != WizardStep::SelectingProgram {
            return Err(DiagnosisError::UnexpectedStep);
        }
        if Program::by_id(program_id).is_none() {
            return Err(DiagnosisError::UnknownProgram(program_id.to_string()));
        }
        self.program_id = program_id.to_owned();
        self.step = WizardStep::Assessing {
            axis: 0,
            question: 0,
        };
        Ok(())
    }

    /// Scores and records the answer for the current position, then
    /// advances question → axis → complete.
    ///
    /// # Errors
    ///
    /// Returns the scoring validation error for invalid input (state
    /// unchanged, nothing recorded) or `UnexpectedStep` outside the
    /// assessment phase.
    pub fn submit_answer(&mut self, raw: &str) -> Result<(), DiagnosisError> {
        let WizardStep::Assessing { axis, question } = self.step else {
            return Err(DiagnosisError::UnexpectedStep);
        };

        let outcome = self.scoring.evaluate(raw)?;
        self.entries.push(AnswerEntry {
            axis,
            question,
            raw: raw.trim().to_owned(),
            score: outcome.score(),
        });

        self.step = self.next_position(axis, question);
        Ok(())
    }

    /// Steps back to the previous prompt, un-recording its answer.
    ///
    /// Returns the previously entered raw input so the UI can restore it
    /// as the editable value.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosisError::AtFirstPrompt` at the very first prompt,
    /// or `UnexpectedStep` outside the assessment phase.
    pub fn go_back(&mut self) -> Result<String, DiagnosisError> {
        if !matches!(self.step, WizardStep::Assessing { .. }) {
            return Err(DiagnosisError::UnexpectedStep);
        }
        let Some(entry) = self.entries.pop() else {
            return Err(DiagnosisError::AtFirstPrompt);
        };
        self.step = WizardStep::Assessing {
            axis: entry.axis,
            question: entry.question,
        };
        Ok(entry.raw)
    }

    /// Progress over the assessment prompts.
    #[must_use]
    pub fn progress(&self) -> WizardProgress {
        WizardProgress {
            answered: self.entries.len(),
            total: self.total_prompts(),
            is_complete: self.step == WizardStep::Complete,
        }
    }

    /// Hands off the completed diagnosis.
    ///
    /// The wizard is consumed so partial results can never leak: either
    /// the walk is complete and the full ordered outcome is returned, or
    /// nothing is.
    ///
    /// # Errors
    ///
    /// Returns `DiagnosisError::Incomplete` if the walk has not reached
    /// the end.
    pub fn into_outcome(self) -> Result<DiagnosisOutcome, DiagnosisError> {
        if self.step != WizardStep::Complete {
            return Err(DiagnosisError::Incomplete);
        }

        let mut assessments = Vec::with_capacity(DIAGNOSIS_AXES.len());
        let mut responses = Vec::new();

        for (axis_index, axis) in DIAGNOSIS_AXES.iter().enumerate() {
            let axis_entries: Vec<&AnswerEntry> = self
                .entries
                .iter()
                .filter(|e| e.axis == axis_index)
                .collect();

            let score = match self.mode {
                WizardMode::AxisScore => axis_entries.first().map_or(0.0, |e| e.score),
                WizardMode::QuestionResponse => {
                    let sum: f64 = axis_entries.iter().map(|e| e.score).sum();
                    sum / axis_entries.len() as f64
                }
            };
            assessments.push(Assessment::new(axis.id, axis.name, score, None)?);

            if self.mode == WizardMode::QuestionResponse {
                for entry in axis_entries {
                    let question = axis.questions[entry.question];
                    responses.push(DiagnosisResponse::new(
                        axis.name,
                        question.text,
                        entry.raw.clone(),
                        entry.score,
                    ));
                }
            }
        }

        Ok(DiagnosisOutcome {
            mentee_name: self.mentee_name,
            program_id: self.program_id,
            assessments,
            responses,
        })
    }

    fn questions_in(&self, axis: &Axis) -> usize {
        match self.mode {
            WizardMode::AxisScore => 1,
            WizardMode::QuestionResponse => axis.questions.len(),
        }
    }

    fn total_prompts(&self) -> usize {
        DIAGNOSIS_AXES
            .iter()
            .map(|axis| self.questions_in(axis))
            .sum()
    }

    fn next_position(&self, axis: usize, question: usize) -> WizardStep {
        if question + 1 < self.questions_in(&DIAGNOSIS_AXES[axis]) {
            WizardStep::Assessing {
                axis,
                question: question + 1,
            }
        } else if axis + 1 < DIAGNOSIS_AXES.len() {
            WizardStep::Assessing {
                axis: axis + 1,
                question: 0,
            }
        } else {
            WizardStep::Complete
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use growup_core::model::MaturityLevel;
    use growup_core::scoring::{KeywordScoring, ScoringError, SliderScoring};

    fn slider_wizard_at_assessment() -> DiagnosisWizard<SliderScoring> {
        let mut wizard = DiagnosisWizard::new(SliderScoring, WizardMode::AxisScore);
        wizard.submit_name("Ana Souza").unwrap();
        wizard.select_program("prog-start").unwrap();
        wizard
    }

    #[test]
    fn blank_name_is_rejected_without_transition() {
        let mut wizard = DiagnosisWizard::new(SliderScoring, WizardMode::AxisScore);
        let err = wizard.submit_name("   ").unwrap_err();
        assert!(matches!(err, DiagnosisError::EmptyName));
        assert_eq!(wizard.step(), WizardStep::CollectingName);

        wizard.submit_name("  Ana  ").unwrap();
        assert_eq!(wizard.step(), WizardStep::SelectingProgram);
    }

    #[test]
    fn unknown_program_is_rejected_without_transition() {
        let mut wizard = DiagnosisWizard::new(SliderScoring, WizardMode::AxisScore);
        wizard.submit_name("Ana").unwrap();
        let err = wizard.select_program("prog-nope").unwrap_err();
        assert!(matches!(err, DiagnosisError::UnknownProgram(_)));
        assert_eq!(wizard.step(), WizardStep::SelectingProgram);
    }

    #[test]
    fn default_program_is_preselected() {
        let wizard = DiagnosisWizard::new(SliderScoring, WizardMode::AxisScore);
        assert_eq!(wizard.program_id(), "prog-start");
    }

    #[test]
    fn walks_all_axes_in_catalog_order() {
        let mut wizard = slider_wizard_at_assessment();
        let mut seen = Vec::new();
        while let Some(prompt) = wizard.current_prompt() {
            seen.push(prompt.axis_name);
            assert_eq!(prompt.question_text, None);
            wizard.submit_answer("3.0").unwrap();
        }
        assert_eq!(wizard.step(), WizardStep::Complete);
        let expected: Vec<_> = DIAGNOSIS_AXES.iter().map(|a| a.name).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn scenario_a_scores_map_to_expected_levels() {
        let mut wizard = slider_wizard_at_assessment();
        for raw in ["1", "2", "3", "4", "1", "2", "3", "4"] {
            wizard.submit_answer(raw).unwrap();
        }
        let outcome = wizard.into_outcome().unwrap();
        let levels: Vec<_> = outcome.assessments().iter().map(Assessment::level).collect();
        assert_eq!(
            levels,
            vec![
                MaturityLevel::Red,
                MaturityLevel::Yellow,
                MaturityLevel::Blue,
                MaturityLevel::Green,
                MaturityLevel::Red,
                MaturityLevel::Yellow,
                MaturityLevel::Blue,
                MaturityLevel::Green,
            ]
        );
    }

    #[test]
    fn invalid_answer_keeps_state_and_records_nothing() {
        let mut wizard = slider_wizard_at_assessment();
        wizard.submit_answer("2.0").unwrap();

        let err = wizard.submit_answer("muito alto").unwrap_err();
        assert!(matches!(
            err,
            DiagnosisError::Scoring(ScoringError::NotNumeric(_))
        ));
        assert_eq!(wizard.step(), WizardStep::Assessing { axis: 1, question: 0 });
        assert_eq!(wizard.progress().answered, 1);
    }

    #[test]
    fn scenario_b_back_navigation_restores_previous_answer() {
        let mut wizard = slider_wizard_at_assessment();
        wizard.submit_answer("1.0").unwrap();
        wizard.submit_answer("2.5").unwrap();
        // Now at axis index 2 with two recorded answers.
        assert_eq!(wizard.step(), WizardStep::Assessing { axis: 2, question: 0 });

        let restored = wizard.go_back().unwrap();
        assert_eq!(restored, "2.5");
        assert_eq!(wizard.step(), WizardStep::Assessing { axis: 1, question: 0 });
        assert_eq!(wizard.progress().answered, 1);

        // Re-submitting axis 2 and the rest yields exactly 8 assessments.
        wizard.submit_answer("3.0").unwrap();
        for _ in 2..DIAGNOSIS_AXES.len() {
            wizard.submit_answer("4.0").unwrap();
        }
        let outcome = wizard.into_outcome().unwrap();
        assert_eq!(outcome.assessments().len(), 8);
        assert!((outcome.assessments()[1].score() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn back_navigation_unavailable_at_first_prompt() {
        let mut wizard = slider_wizard_at_assessment();
        let err = wizard.go_back().unwrap_err();
        assert!(matches!(err, DiagnosisError::AtFirstPrompt));
        assert_eq!(wizard.step(), WizardStep::Assessing { axis: 0, question: 0 });
    }

    #[test]
    fn outcome_is_unavailable_before_completion() {
        let mut wizard = slider_wizard_at_assessment();
        wizard.submit_answer("3.0").unwrap();
        let err = wizard.into_outcome().unwrap_err();
        assert!(matches!(err, DiagnosisError::Incomplete));
    }

    #[test]
    fn operations_outside_their_step_are_rejected() {
        let mut wizard = DiagnosisWizard::new(SliderScoring, WizardMode::AxisScore);
        assert!(matches!(
            wizard.submit_answer("3.0").unwrap_err(),
            DiagnosisError::UnexpectedStep
        ));
        assert!(matches!(
            wizard.go_back().unwrap_err(),
            DiagnosisError::UnexpectedStep
        ));

        wizard.submit_name("Ana").unwrap();
        assert!(matches!(
            wizard.submit_name("Ana de novo").unwrap_err(),
            DiagnosisError::UnexpectedStep
        ));
    }

    #[test]
    fn question_mode_walks_every_question_and_averages() {
        let mut wizard = DiagnosisWizard::new(KeywordScoring, WizardMode::QuestionResponse);
        wizard.submit_name("Bruno").unwrap();
        wizard.select_program("prog-exclusive").unwrap();

        let total = wizard.progress().total;
        assert_eq!(total, 40);

        // First axis: alternate negation (1.0) and affirmative (4.0).
        for i in 0..5 {
            let answer = if i % 2 == 0 { "Não temos" } else { "Sim, possui" };
            wizard.submit_answer(answer).unwrap();
        }
        // Remaining axes: neutral answers (3.0 each).
        while wizard.step() != WizardStep::Complete {
            wizard.submit_answer("Planilha revisada pelo contador").unwrap();
        }

        let outcome = wizard.into_outcome().unwrap();
        assert_eq!(outcome.assessments().len(), 8);
        // (1 + 4 + 1 + 4 + 1) / 5 = 2.2
        assert!((outcome.assessments()[0].score() - 2.2).abs() < 1e-9);
        assert_eq!(outcome.assessments()[0].level(), MaturityLevel::Yellow);

        // Raw responses kept for the detail view, grouped by axis.
        assert_eq!(outcome.responses().len(), 40);
        assert_eq!(outcome.responses()[0].axis_name, "Sócios");
        assert_eq!(outcome.responses()[0].response, "Não temos");
    }

    #[test]
    fn question_mode_prompts_expose_question_text() {
        let mut wizard = DiagnosisWizard::new(KeywordScoring, WizardMode::QuestionResponse);
        wizard.submit_name("Carla").unwrap();
        wizard.select_program("prog-start").unwrap();

        let prompt = wizard.current_prompt().unwrap();
        assert_eq!(prompt.axis_name, "Sócios");
        assert_eq!(
            prompt.question_text,
            Some("Possui acordo de sócios ou quotistas formalmente estabelecido?")
        );
    }
}
