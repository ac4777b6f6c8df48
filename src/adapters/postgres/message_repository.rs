//! PostgreSQL implementation of MessageRepository.

use crate::domain::conversation::{Message, Role};
use crate::domain::foundation::{DomainError, ErrorCode, EventId, MessageId, Timestamp};
use crate::ports::MessageRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    role: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = DomainError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid role value: {}", row.role),
            )
        })?;

        Ok(Message::reconstitute(
            MessageId::from_uuid(row.id),
            role,
            row.content,
            Timestamp::from_datetime(row.created_at),
        ))
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn append(&self, event_id: &EventId, messages: &[Message]) -> Result<usize, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let mut added = 0;
        for message in messages {
            let result = sqlx::query(
                r#"
                INSERT INTO conversation_messages (id, event_id, role, content, created_at)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(message.id.as_uuid())
            .bind(event_id.as_uuid())
            .bind(message.role.as_str())
            .bind(&message.content)
            .bind(message.created_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        return DomainError::new(ErrorCode::EventNotFound, "Event not found");
                    }
                }
                DomainError::database("Failed to save message", e)
            })?;
            added += result.rows_affected() as usize;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit messages", e))?;

        Ok(added)
    }

    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Message>, DomainError> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            r#"
            SELECT id, role, content, created_at
            FROM conversation_messages
            WHERE event_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(event_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list messages", e))?;

        rows.into_iter().map(Message::try_from).collect()
    }
}
