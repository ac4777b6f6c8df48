//! PostgreSQL implementation of EventRepository.
//!
//! Message and task rows reference events with `ON DELETE CASCADE`.

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, ErrorCode, EventId, Timestamp, UserId};
use crate::ports::EventRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an event.
#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    user_id: String,
    title: String,
    description: Option<String>,
    event_date: Option<NaiveDate>,
    location: Option<String>,
    attendee_count: i32,
    event_type: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: EventId::from_uuid(row.id),
            user_id: UserId::new(row.user_id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            title: row.title,
            description: row.description,
            date: row.event_date,
            location: row.location,
            attendee_count: u32::try_from(row.attendee_count).unwrap_or(0),
            event_type: row.event_type,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn save(&self, event: &Event) -> Result<(), DomainError> {
        let attendee_count = i32::try_from(event.attendee_count).map_err(|_| {
            DomainError::new(ErrorCode::ValidationFailed, "Attendee count is too large")
        })?;

        sqlx::query(
            r#"
            INSERT INTO events (
                id, user_id, title, description, event_date, location,
                attendee_count, event_type, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(event.user_id.as_str())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date)
        .bind(&event.location)
        .bind(attendee_count)
        .bind(&event.event_type)
        .bind(event.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save event", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, description, event_date, location,
                   attendee_count, event_type, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find event", e))?;

        row.map(Event::try_from).transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Event>, DomainError> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, title, description, event_date, location,
                   attendee_count, event_type, created_at
            FROM events
            WHERE user_id = $1
            ORDER BY event_date ASC NULLS LAST, created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list events", e))?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn delete(&self, id: &EventId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete event", e))?;

        Ok(result.rows_affected() > 0)
    }
}
