//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the issuance pipeline to external systems:
//! - `document` - Template loading, handlebars rendering, artifact storage
//! - `memory` - In-process counters and area records
//! - `postgres` - Database-backed counters and area records

pub mod document;
pub mod memory;
pub mod postgres;

pub use document::{
    FileTemplateSource, HandlebarsTemplateEngine, LocalArtifactStorage, DEFAULT_MAX_ARTIFACT_BYTES,
};
pub use memory::{InMemoryAreaRecords, InMemorySequenceStore};
pub use postgres::{PostgresAreaRecords, PostgresSequenceStore, MIGRATOR};
