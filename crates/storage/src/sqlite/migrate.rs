use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

/// Runs a single, consolidated migration for the current schema.
///
/// Creates the full schema (mentees, pillars, diagnosis responses, sprints
/// with their tasks, and indexes).
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    // Version 1: full schema.
    if !is_applied(pool, 1).await? {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS mentees (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    avatar_url TEXT NOT NULL,
                    program_id TEXT NOT NULL,
                    created_at TEXT NOT NULL
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS pillars (
                    mentee_id TEXT NOT NULL,
                    position INTEGER NOT NULL,
                    name TEXT NOT NULL,
                    score REAL NOT NULL CHECK (score >= 0 AND score <= 5),
                    maturity_level TEXT NOT NULL,
                    sprints INTEGER NOT NULL CHECK (sprints >= 0),
                    tasks_completed INTEGER NOT NULL CHECK (tasks_completed >= 0),
                    tasks_total INTEGER NOT NULL CHECK (tasks_total >= 0),
                    findings TEXT,
                    PRIMARY KEY (mentee_id, name),
                    FOREIGN KEY (mentee_id) REFERENCES mentees(id) ON DELETE CASCADE
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS diagnosis_responses (
                    id INTEGER PRIMARY KEY,
                    mentee_id TEXT NOT NULL,
                    axis_name TEXT NOT NULL,
                    question_text TEXT NOT NULL,
                    response TEXT NOT NULL,
                    score REAL NOT NULL CHECK (score >= 0 AND score <= 5),
                    FOREIGN KEY (mentee_id) REFERENCES mentees(id) ON DELETE CASCADE
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS sprints (
                    id TEXT PRIMARY KEY,
                    mentee_id TEXT NOT NULL,
                    pillar_name TEXT NOT NULL,
                    name TEXT NOT NULL,
                    goal TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    FOREIGN KEY (mentee_id) REFERENCES mentees(id) ON DELETE CASCADE,
                    FOREIGN KEY (mentee_id, pillar_name)
                        REFERENCES pillars(mentee_id, name) ON DELETE CASCADE
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS sprint_tasks (
                    id TEXT PRIMARY KEY,
                    sprint_id TEXT NOT NULL,
                    position INTEGER NOT NULL,
                    title TEXT NOT NULL,
                    is_custom INTEGER NOT NULL CHECK (is_custom IN (0, 1)),
                    priority TEXT NOT NULL CHECK (priority IN ('low', 'medium', 'high')),
                    due_date TEXT,
                    FOREIGN KEY (sprint_id) REFERENCES sprints(id) ON DELETE CASCADE
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE INDEX IF NOT EXISTS idx_mentees_created_at
                    ON mentees(created_at);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE INDEX IF NOT EXISTS idx_responses_mentee_axis
                    ON diagnosis_responses(mentee_id, axis_name);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE INDEX IF NOT EXISTS idx_sprints_mentee_pillar
                    ON sprints(mentee_id, pillar_name);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO schema_migrations (version, applied_at) VALUES (1, ?1)")
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
    }

    Ok(())
}
