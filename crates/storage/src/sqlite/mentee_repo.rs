use growup_core::model::{Mentee, MenteeId};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::SqliteRepository;
use super::mapping::{mentee_id_from_text, ser};
use crate::repository::{MenteeRepository, StorageError};

#[async_trait::async_trait]
impl MenteeRepository for SqliteRepository {
    async fn insert_mentee(&self, mentee: &Mentee) -> Result<(), StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO mentees (id, name, avatar_url, program_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(mentee.id().to_string())
        .bind(mentee.name())
        .bind(mentee.avatar_url())
        .bind(mentee.program_id())
        .bind(mentee.created_at())
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StorageError::Conflict)
            }
            Err(e) => Err(StorageError::Connection(e.to_string())),
        }
    }

    async fn latest_mentee(&self) -> Result<Option<Mentee>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, name, avatar_url, program_id, created_at
            FROM mentees
            ORDER BY created_at DESC, rowid DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => mentee_from_row(&row).map(Some),
            None => Ok(None),
        }
    }

    async fn update_program(&self, id: MenteeId, program_id: &str) -> Result<(), StorageError> {
        let res = sqlx::query("UPDATE mentees SET program_id = ?1 WHERE id = ?2")
            .bind(program_id)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn delete_mentee(&self, id: MenteeId) -> Result<(), StorageError> {
        // Pillars, responses and sprints go with it via FK cascade.
        sqlx::query("DELETE FROM mentees WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }
}

fn mentee_from_row(row: &SqliteRow) -> Result<Mentee, StorageError> {
    Mentee::from_persisted(
        mentee_id_from_text(&row.try_get::<String, _>("id").map_err(ser)?)?,
        row.try_get::<String, _>("name").map_err(ser)?,
        row.try_get::<String, _>("avatar_url").map_err(ser)?,
        row.try_get::<String, _>("program_id").map_err(ser)?,
        row.try_get("created_at").map_err(ser)?,
    )
    .map_err(|e| StorageError::Serialization(e.to_string()))
}
