//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the issuance pipeline and the outside world. Adapters implement these ports.
//!
//! ## Numbering
//!
//! - `SequenceCounterStore` - Atomic per-scope decree counters
//!
//! ## Rendering
//!
//! - `TemplateSource` - Loads the decree template
//! - `TemplateEngine` - Merges fields into the template
//! - `ArtifactStorage` - Stores rendered decrees
//!
//! ## Write-back
//!
//! - `AreaRecordRepository` - Administrative area records

mod area_record_repository;
mod artifact_storage;
mod sequence_counter_store;
mod template_engine;
mod template_source;

pub use area_record_repository::{AdministrativeAreaRecord, AreaRecordRepository, RecordError};
pub use artifact_storage::{ArtifactStorage, StorageError};
pub use sequence_counter_store::{checked_sequence, AllocationError, SequenceCounterStore};
pub use template_engine::{TemplateDocument, TemplateEngine, TemplateError};
pub use template_source::TemplateSource;
