use growup_core::model::{DiagnosisResponse, MenteeId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::ser;
use crate::repository::{ResponseRepository, StorageError};

#[async_trait::async_trait]
impl ResponseRepository for SqliteRepository {
    async fn insert_responses(
        &self,
        mentee_id: MenteeId,
        responses: &[DiagnosisResponse],
    ) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        for response in responses {
            sqlx::query(
                r"
                INSERT INTO diagnosis_responses
                    (mentee_id, axis_name, question_text, response, score)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
            )
            .bind(mentee_id.to_string())
            .bind(&response.axis_name)
            .bind(&response.question_text)
            .bind(&response.response)
            .bind(response.score)
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn list_responses(
        &self,
        mentee_id: MenteeId,
        axis_name: &str,
    ) -> Result<Vec<DiagnosisResponse>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT axis_name, question_text, response, score
            FROM diagnosis_responses
            WHERE mentee_id = ?1 AND axis_name = ?2
            ORDER BY id ASC
            ",
        )
        .bind(mentee_id.to_string())
        .bind(axis_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut responses = Vec::with_capacity(rows.len());
        for row in rows {
            responses.push(DiagnosisResponse::new(
                row.try_get::<String, _>("axis_name").map_err(ser)?,
                row.try_get::<String, _>("question_text").map_err(ser)?,
                row.try_get::<String, _>("response").map_err(ser)?,
                row.try_get::<f64, _>("score").map_err(ser)?,
            ));
        }
        Ok(responses)
    }
}
