//! In-Memory Adapters
//!
//! Implementations of the numbering and record ports that keep state in
//! process memory.
//!
//! ## Available Adapters
//!
//! - **InMemorySequenceStore** - Per-scope decree counters
//! - **InMemoryAreaRecords** - Administrative area records
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::memory::{InMemoryAreaRecords, InMemorySequenceStore};
//!
//! let counters = InMemorySequenceStore::new();
//! let records = InMemoryAreaRecords::with_records(vec![record]);
//! ```

mod area_records;
mod sequence_store;

pub use area_records::InMemoryAreaRecords;
pub use sequence_store::InMemorySequenceStore;
