//! PostgreSQL adapters - Database implementations for the numbering and record ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresSequenceStore` - Per-scope counters with atomic upsert allocation
//! - `PostgresAreaRecords` - Administrative area lookup and issuance write-back
//!
//! Schema lives in `migrations/` and is applied through [`MIGRATOR`].

mod area_records;
mod sequence_store;

pub use area_records::PostgresAreaRecords;
pub use sequence_store::PostgresSequenceStore;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
