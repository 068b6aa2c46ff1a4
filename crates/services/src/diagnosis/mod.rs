mod progress;
mod service;
mod wizard;

pub use progress::WizardProgress;
pub use service::DiagnosisService;
pub use wizard::{DiagnosisOutcome, DiagnosisWizard, WizardMode, WizardPrompt, WizardStep};
