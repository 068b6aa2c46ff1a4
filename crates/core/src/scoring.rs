//! Pluggable answer-to-score strategies for the diagnosis wizard.
//!
//! The wizard only needs a function from raw input to a score and its
//! derived maturity level; the two observed strategies (bounded slider
//! and free-text keyword heuristic) both live behind [`ScoringStrategy`].

use thiserror::Error;

use crate::model::MaturityLevel;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Validation errors produced while scoring a raw answer. The wizard
/// treats these as recoverable: the state does not advance.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("response cannot be empty")]
    EmptyResponse,

    #[error("not a numeric score: {0}")]
    NotNumeric(String),

    #[error("score {0} is outside the 0-5 range")]
    OutOfRange(f64),
}

//
// ─── SCORE OUTCOME ─────────────────────────────────────────────────────────────
//

/// A scored answer: the numeric score in [0, 5] and its derived level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOutcome {
    score: f64,
    level: MaturityLevel,
}

impl ScoreOutcome {
    /// Builds an outcome, deriving the level from the score.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::OutOfRange` if the score is outside [0, 5].
    pub fn from_score(score: f64) -> Result<Self, ScoringError> {
        if !score.is_finite() || !(0.0..=5.0).contains(&score) {
            return Err(ScoringError::OutOfRange(score));
        }
        Ok(Self {
            score,
            level: MaturityLevel::from_score(score),
        })
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> MaturityLevel {
        self.level
    }
}

//
// ─── STRATEGY ──────────────────────────────────────────────────────────────────
//

/// Maps one raw wizard answer to a score and maturity level.
pub trait ScoringStrategy {
    /// Scores a raw answer.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError` when the input is incomplete or invalid;
    /// the caller must keep its state unchanged in that case.
    fn evaluate(&self, input: &str) -> Result<ScoreOutcome, ScoringError>;
}

//
// ─── SLIDER ────────────────────────────────────────────────────────────────────
//

/// Direct numeric strategy: the answer is a 0-5 score from a bounded
/// slider.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderScoring;

impl ScoringStrategy for SliderScoring {
    fn evaluate(&self, input: &str) -> Result<ScoreOutcome, ScoringError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ScoringError::EmptyResponse);
        }
        let score: f64 = trimmed
            .parse()
            .map_err(|_| ScoringError::NotNumeric(trimmed.to_string()))?;
        ScoreOutcome::from_score(score)
    }
}

//
// ─── KEYWORDS ──────────────────────────────────────────────────────────────────
//

/// Keyword category checked against a lower-cased answer.
struct KeywordCategory {
    keywords: &'static [&'static str],
    score: f64,
}

/// Explicit priority order: negation beats partial beats affirmative.
/// "Não possui nenhum controle" contains the affirmative "possui", but
/// the negation category is checked first and wins.
const KEYWORD_POLICY: [KeywordCategory; 3] = [
    KeywordCategory {
        keywords: &[
            "não", "nao", "nenhum", "nenhuma", "nada", "nunca", "inexistente",
        ],
        score: 1.0,
    },
    KeywordCategory {
        keywords: &[
            "parcial",
            "parcialmente",
            "básico",
            "basico",
            "às vezes",
            "as vezes",
            "em parte",
            "iniciando",
            "começando",
            "comecando",
        ],
        score: 2.5,
    },
    KeywordCategory {
        keywords: &[
            "sim",
            "possui",
            "possuímos",
            "possuimos",
            "temos",
            "existe",
            "sempre",
            "utilizamos",
            "utilizo",
        ],
        score: 4.0,
    },
];

/// Score assigned when no keyword category matches.
const NEUTRAL_SCORE: f64 = 3.0;

/// Qualitative strategy: scores Portuguese free text by keyword presence.
///
/// This is a heuristic; the category order above is a deliberate,
/// testable policy, not an accident of code layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScoring;

impl ScoringStrategy for KeywordScoring {
    fn evaluate(&self, input: &str) -> Result<ScoreOutcome, ScoringError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ScoringError::EmptyResponse);
        }
        let lowered = trimmed.to_lowercase();

        let score = KEYWORD_POLICY
            .iter()
            .find(|category| category.keywords.iter().any(|kw| lowered.contains(kw)))
            .map_or(NEUTRAL_SCORE, |category| category.score);

        ScoreOutcome::from_score(score)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
