mod assessment;
mod axis;
mod ids;
mod maturity;
mod mentee;
mod pillar;
mod sprint;

pub use assessment::{Assessment, AssessmentError, DiagnosisResponse};
pub use axis::{Axis, DEFAULT_PROGRAM_ID, DIAGNOSIS_AXES, PROGRAMS, Program, Question};
pub use ids::{MenteeId, ParseIdError, SprintId, TaskId};
pub use maturity::{MaturityError, MaturityLevel, MaturityStyle};
pub use mentee::{Mentee, MenteeError};
pub use pillar::{Pillar, PillarError};
pub use sprint::{Sprint, SprintError, Task, TaskPriority};
