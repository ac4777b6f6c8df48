//! PostgreSQL implementation of TaskRepository.

use crate::domain::foundation::{DomainError, ErrorCode, EventId, TaskId, Timestamp};
use crate::domain::task::Task;
use crate::ports::TaskRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    event_id: Uuid,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: TaskId::from_uuid(row.id),
            event_id: EventId::from_uuid(row.event_id),
            title: row.title,
            completed: row.completed,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

fn map_insert_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return DomainError::new(ErrorCode::EventNotFound, "Event not found");
        }
    }
    DomainError::database("Failed to save task", e)
}

const INSERT_TASK: &str = r#"
    INSERT INTO event_tasks (id, event_id, title, completed, created_at)
    VALUES ($1, $2, $3, $4, $5)
"#;

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn save(&self, task: &Task) -> Result<(), DomainError> {
        sqlx::query(INSERT_TASK)
            .bind(task.id.as_uuid())
            .bind(task.event_id.as_uuid())
            .bind(&task.title)
            .bind(task.completed)
            .bind(task.created_at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(map_insert_error)?;

        Ok(())
    }

    async fn save_all(&self, tasks: &[Task]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        for task in tasks {
            sqlx::query(INSERT_TASK)
                .bind(task.id.as_uuid())
                .bind(task.event_id.as_uuid())
                .bind(&task.title)
                .bind(task.completed)
                .bind(task.created_at.as_datetime())
                .execute(&mut *tx)
                .await
                .map_err(map_insert_error)?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit tasks", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, DomainError> {
        let row: Option<TaskRow> = sqlx::query_as(
            r#"
            SELECT id, event_id, title, completed, created_at
            FROM event_tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find task", e))?;

        Ok(row.map(Task::from))
    }

    async fn set_completed(&self, id: &TaskId, completed: bool) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE event_tasks SET completed = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(completed)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to update task", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::TaskNotFound, "Task not found"));
        }

        Ok(())
    }

    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Task>, DomainError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
            SELECT id, event_id, title, completed, created_at
            FROM event_tasks
            WHERE event_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list tasks", e))?;

        Ok(rows.into_iter().map(Task::from).collect())
    }
}
