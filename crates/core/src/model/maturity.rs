use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when handling maturity levels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaturityError {
    #[error("unknown maturity level: {0}")]
    UnknownLevel(String),
}

//
// ─── MATURITY LEVEL ────────────────────────────────────────────────────────────
//

/// Coarse maturity band for a pillar, ordered by ascending maturity.
///
/// Levels are always derived from a 0-5 score by fixed thresholds:
/// - `Red`: score < 2 (Inicial)
/// - `Yellow`: score < 3 (Em Desenvolvimento)
/// - `Blue`: score < 4 (Avançado)
/// - `Green`: score >= 4 (Excelente)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityLevel {
    Red,
    Yellow,
    Blue,
    Green,
}

/// Presentation entry for one maturity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaturityStyle {
    pub label: &'static str,
    pub color_hex: &'static str,
}

/// Lookup table keyed by level order; presentation is data, not branching.
const STYLES: [MaturityStyle; 4] = [
    MaturityStyle {
        label: "Inicial",
        color_hex: "#ef4444",
    },
    MaturityStyle {
        label: "Em Desenvolvimento",
        color_hex: "#eab308",
    },
    MaturityStyle {
        label: "Avançado",
        color_hex: "#3b82f6",
    },
    MaturityStyle {
        label: "Excelente",
        color_hex: "#22c55e",
    },
];

impl MaturityLevel {
    /// Derives the maturity level from a 0-5 score.
    ///
    /// Thresholds are fixed: `<2` red, `<3` yellow, `<4` blue, else green.
    /// Scores outside [0, 5] are the caller's problem; derivation still
    /// saturates into the nearest band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 2.0 {
            Self::Red
        } else if score < 3.0 {
            Self::Yellow
        } else if score < 4.0 {
            Self::Blue
        } else {
            Self::Green
        }
    }

    /// Storage-facing identifier for this level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Presentation style (label + color) for this level.
    #[must_use]
    pub fn style(self) -> MaturityStyle {
        STYLES[self as usize]
    }

    /// All levels in ascending maturity order.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Red, Self::Yellow, Self::Blue, Self::Green]
    }
}

impl FromStr for MaturityLevel {
    type Err = MaturityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            other => Err(MaturityError::UnknownLevel(other.to_string())),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
