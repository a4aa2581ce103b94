//! PostgreSQL implementation of SequenceCounterStore.
//!
//! Each scope is one row in `decree_sequences`. Allocation is a single
//! upsert with `RETURNING`, so the row lock serializes concurrent callers.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::numbering::{SequenceNumber, SequenceScope};
use crate::ports::{checked_sequence, AllocationError, SequenceCounterStore};

/// PostgreSQL implementation of the SequenceCounterStore port.
pub struct PostgresSequenceStore {
    pool: PgPool,
}

impl PostgresSequenceStore {
    /// Creates a new PostgresSequenceStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceCounterStore for PostgresSequenceStore {
    async fn next_value(&self, scope: &SequenceScope) -> Result<SequenceNumber, AllocationError> {
        let (value,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO decree_sequences (tier, category, year, value)
            VALUES ($1, $2, $3, 1)
            ON CONFLICT (tier, category, year)
            DO UPDATE SET value = decree_sequences.value + 1, updated_at = NOW()
            RETURNING value
            "#,
        )
        .bind(&scope.tier)
        .bind(&scope.category)
        .bind(scope.year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AllocationError::unavailable(format!("Failed to allocate sequence: {}", e)))?;

        tracing::debug!(scope = %scope, value, "Allocated decree sequence");
        checked_sequence(scope, value)
    }

    async fn current_value(&self, scope: &SequenceScope) -> Result<u32, AllocationError> {
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            SELECT value FROM decree_sequences
            WHERE tier = $1 AND category = $2 AND year = $3
            "#,
        )
        .bind(&scope.tier)
        .bind(&scope.category)
        .bind(scope.year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AllocationError::unavailable(format!("Failed to read sequence: {}", e)))?;

        match row {
            None => Ok(0),
            Some((raw,)) => u32::try_from(raw).map_err(|_| AllocationError::invalid_value(scope, raw)),
        }
    }

    async fn seed(&self, scope: &SequenceScope, value: u32) -> Result<u32, AllocationError> {
        let (raw,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO decree_sequences (tier, category, year, value)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (tier, category, year)
            DO UPDATE SET value = GREATEST(decree_sequences.value, EXCLUDED.value), updated_at = NOW()
            RETURNING value
            "#,
        )
        .bind(&scope.tier)
        .bind(&scope.category)
        .bind(scope.year)
        .bind(i64::from(value))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AllocationError::unavailable(format!("Failed to seed sequence: {}", e)))?;

        tracing::info!(scope = %scope, value = raw, "Seeded decree sequence");
        u32::try_from(raw).map_err(|_| AllocationError::invalid_value(scope, raw))
    }
}
