use serde::Serialize;

/// Aggregated view of wizard progress, useful for UI progress bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    pub answered: usize,
    pub total: usize,
    pub is_complete: bool,
}

impl WizardProgress {
    /// Percentage of answered prompts, rounded to the nearest integer.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let ratio = self.answered as f64 / self.total as f64;
        (ratio * 100.0).round() as u32
    }
}
