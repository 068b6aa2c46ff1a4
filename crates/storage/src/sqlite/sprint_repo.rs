use chrono::NaiveDate;
use growup_core::model::{MenteeId, Sprint, Task};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{priority_from_text, ser, sprint_id_from_text, task_id_from_text};
use crate::repository::{SprintRepository, StorageError};

#[async_trait::async_trait]
impl SprintRepository for SqliteRepository {
    async fn insert_sprint(
        &self,
        mentee_id: MenteeId,
        sprint: &Sprint,
    ) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        // Counter bump first: zero rows affected means the owning pillar
        // does not exist and nothing else must be written.
        let updated = sqlx::query(
            r"
            UPDATE pillars
            SET sprints = sprints + 1,
                tasks_total = tasks_total + ?1
            WHERE mentee_id = ?2 AND name = ?3
            ",
        )
        .bind(i64::from(sprint.task_count()))
        .bind(mentee_id.to_string())
        .bind(sprint.pillar_name())
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        if updated.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        sqlx::query(
            r"
            INSERT INTO sprints (id, mentee_id, pillar_name, name, goal, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(sprint.id().to_string())
        .bind(mentee_id.to_string())
        .bind(sprint.pillar_name())
        .bind(sprint.name())
        .bind(sprint.goal())
        .bind(sprint.created_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        for (position, task) in sprint.tasks().iter().enumerate() {
            sqlx::query(
                r"
                INSERT INTO sprint_tasks (id, sprint_id, position, title, is_custom, priority, due_date)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                ",
            )
            .bind(task.id().to_string())
            .bind(sprint.id().to_string())
            .bind(i64::try_from(position).map_err(ser)?)
            .bind(task.title())
            .bind(i64::from(task.is_custom()))
            .bind(task.priority().as_str())
            .bind(task.due_date())
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn list_sprints(
        &self,
        mentee_id: MenteeId,
        pillar_name: &str,
    ) -> Result<Vec<Sprint>, StorageError> {
        let sprint_rows = sqlx::query(
            r"
            SELECT id, pillar_name, name, goal, created_at
            FROM sprints
            WHERE mentee_id = ?1 AND pillar_name = ?2
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(mentee_id.to_string())
        .bind(pillar_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut sprints = Vec::with_capacity(sprint_rows.len());
        for row in sprint_rows {
            let sprint_id_text = row.try_get::<String, _>("id").map_err(ser)?;
            let sprint_id = sprint_id_from_text(&sprint_id_text)?;

            let task_rows = sqlx::query(
                r"
                SELECT id, title, is_custom, priority, due_date
                FROM sprint_tasks
                WHERE sprint_id = ?1
                ORDER BY position ASC
                ",
            )
            .bind(&sprint_id_text)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

            let mut tasks = Vec::with_capacity(task_rows.len());
            for task_row in task_rows {
                tasks.push(task_from_row(&task_row)?);
            }

            let sprint = Sprint::new(
                sprint_id,
                row.try_get::<String, _>("pillar_name").map_err(ser)?,
                row.try_get::<String, _>("name").map_err(ser)?,
                row.try_get::<String, _>("goal").map_err(ser)?,
                tasks,
                row.try_get("created_at").map_err(ser)?,
            )
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
            sprints.push(sprint);
        }
        Ok(sprints)
    }
}

fn task_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Task, StorageError> {
    Task::from_persisted(
        task_id_from_text(&row.try_get::<String, _>("id").map_err(ser)?)?,
        row.try_get::<String, _>("title").map_err(ser)?,
        row.try_get::<i64, _>("is_custom").map_err(ser)? != 0,
        priority_from_text(&row.try_get::<String, _>("priority").map_err(ser)?)?,
        row.try_get::<Option<NaiveDate>, _>("due_date").map_err(ser)?,
    )
    .map_err(|e| StorageError::Serialization(e.to_string()))
}
