//! PostgreSQL implementation of VendorRepository.

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId, VendorId};
use crate::domain::vendor::VendorProfile;
use crate::ports::VendorRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresVendorRepository {
    pool: PgPool,
}

impl PostgresVendorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct VendorRow {
    id: Uuid,
    user_id: String,
    business_name: String,
    category: String,
    description: Option<String>,
    location: Option<String>,
    price_range: Option<String>,
    rating: Option<f64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<VendorRow> for VendorProfile {
    type Error = DomainError;

    fn try_from(row: VendorRow) -> Result<Self, Self::Error> {
        Ok(VendorProfile {
            id: VendorId::from_uuid(row.id),
            user_id: UserId::new(row.user_id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })?,
            business_name: row.business_name,
            category: row.category,
            description: row.description,
            location: row.location,
            price_range: row.price_range,
            rating: row.rating,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

const SELECT_VENDOR: &str = r#"
    SELECT id, user_id, business_name, category, description, location,
           price_range, rating, created_at
    FROM vendors
"#;

#[async_trait]
impl VendorRepository for PostgresVendorRepository {
    async fn upsert(&self, profile: &VendorProfile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO vendors (
                id, user_id, business_name, category, description, location,
                price_range, rating, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id) DO UPDATE SET
                business_name = EXCLUDED.business_name,
                category = EXCLUDED.category,
                description = EXCLUDED.description,
                location = EXCLUDED.location,
                price_range = EXCLUDED.price_range
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(profile.user_id.as_str())
        .bind(&profile.business_name)
        .bind(&profile.category)
        .bind(&profile.description)
        .bind(&profile.location)
        .bind(&profile.price_range)
        .bind(profile.rating)
        .bind(profile.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save vendor profile", e))?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<VendorProfile>, DomainError> {
        let row: Option<VendorRow> = sqlx::query_as(&format!("{} WHERE user_id = $1", SELECT_VENDOR))
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to find vendor profile", e))?;

        row.map(VendorProfile::try_from).transpose()
    }

    async fn list_newest_first(&self) -> Result<Vec<VendorProfile>, DomainError> {
        let rows: Vec<VendorRow> =
            sqlx::query_as(&format!("{} ORDER BY created_at DESC", SELECT_VENDOR))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list vendor profiles", e))?;

        rows.into_iter().map(VendorProfile::try_from).collect()
    }
}
