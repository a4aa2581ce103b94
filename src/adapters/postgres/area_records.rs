//! PostgreSQL implementation of AreaRecordRepository.
//!
//! Issuance writes only `latest_decree_number` and `decree_expires_on`;
//! the rest of the row belongs to the surrounding system.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::decree::AreaIssuanceUpdate;
use crate::ports::{AreaRecordRepository, RecordError};

/// PostgreSQL implementation of the AreaRecordRepository port.
pub struct PostgresAreaRecords {
    pool: PgPool,
}

impl PostgresAreaRecords {
    /// Creates a new PostgresAreaRecords with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AreaRecordRepository for PostgresAreaRecords {
    async fn apply_issuance(
        &self,
        area_name: &str,
        update: &AreaIssuanceUpdate,
    ) -> Result<Option<Uuid>, RecordError> {
        let row: Option<(Uuid,)> = sqlx::query_as(
            r#"
            UPDATE administrative_areas SET
                latest_decree_number = $2,
                decree_expires_on = $3
            WHERE id = (
                SELECT id FROM administrative_areas
                WHERE LOWER(TRIM(name)) = LOWER(TRIM($1))
                LIMIT 1
            )
            RETURNING id
            "#,
        )
        .bind(area_name)
        .bind(update.latest_decree_number.as_str())
        .bind(update.decree_expires_on)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RecordError::write_failed(format!("Failed to update area: {}", e)))?;

        Ok(row.map(|(id,)| id))
    }
}
