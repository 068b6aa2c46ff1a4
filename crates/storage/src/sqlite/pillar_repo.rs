use growup_core::model::{Assessment, MenteeId, Pillar};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::SqliteRepository;
use super::mapping::{count_from_i64, ser};
use crate::repository::{PillarRepository, StorageError};

#[async_trait::async_trait]
impl PillarRepository for SqliteRepository {
    async fn insert_pillars(
        &self,
        mentee_id: MenteeId,
        assessments: &[Assessment],
    ) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        for (position, assessment) in assessments.iter().enumerate() {
            let res = sqlx::query(
                r"
                INSERT INTO pillars
                    (mentee_id, position, name, score, maturity_level,
                     sprints, tasks_completed, tasks_total, findings)
                VALUES (?1, ?2, ?3, ?4, ?5, 0, 0, 0, ?6)
                ",
            )
            .bind(mentee_id.to_string())
            .bind(i64::try_from(position).map_err(ser)?)
            .bind(assessment.axis_name())
            .bind(assessment.score())
            .bind(assessment.level().as_str())
            .bind(assessment.notes())
            .execute(&mut *tx)
            .await;

            match res {
                Ok(_) => {}
                Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                    return Err(StorageError::Conflict);
                }
                Err(e) => return Err(StorageError::Connection(e.to_string())),
            }
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn list_pillars(&self, mentee_id: MenteeId) -> Result<Vec<Pillar>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT name, score, sprints, tasks_completed, tasks_total, findings
            FROM pillars
            WHERE mentee_id = ?1
            ORDER BY position ASC
            ",
        )
        .bind(mentee_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut pillars = Vec::with_capacity(rows.len());
        for row in rows {
            pillars.push(pillar_from_row(&row)?);
        }
        Ok(pillars)
    }
}

fn pillar_from_row(row: &SqliteRow) -> Result<Pillar, StorageError> {
    Pillar::from_persisted(
        row.try_get::<String, _>("name").map_err(ser)?,
        row.try_get::<f64, _>("score").map_err(ser)?,
        count_from_i64("sprints", row.try_get::<i64, _>("sprints").map_err(ser)?)?,
        count_from_i64(
            "tasks_completed",
            row.try_get::<i64, _>("tasks_completed").map_err(ser)?,
        )?,
        count_from_i64(
            "tasks_total",
            row.try_get::<i64, _>("tasks_total").map_err(ser)?,
        )?,
        row.try_get::<Option<String>, _>("findings").map_err(ser)?,
    )
    .map_err(|e| StorageError::Serialization(e.to_string()))
}
