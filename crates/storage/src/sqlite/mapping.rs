use growup_core::model::{MenteeId, SprintId, TaskId, TaskPriority};

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn mentee_id_from_text(v: &str) -> Result<MenteeId, StorageError> {
    v.parse().map_err(ser)
}

pub(crate) fn sprint_id_from_text(v: &str) -> Result<SprintId, StorageError> {
    v.parse().map_err(ser)
}

pub(crate) fn task_id_from_text(v: &str) -> Result<TaskId, StorageError> {
    v.parse().map_err(ser)
}

pub(crate) fn priority_from_text(v: &str) -> Result<TaskPriority, StorageError> {
    v.parse().map_err(ser)
}

pub(crate) fn count_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}
