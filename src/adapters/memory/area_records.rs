//! In-Memory Area Record Repository
//!
//! Holds administrative area records in memory. Useful for testing and
//! development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::decree::AreaIssuanceUpdate;
use crate::ports::{AdministrativeAreaRecord, AreaRecordRepository, RecordError};

/// In-memory storage for area records
#[derive(Debug, Clone, Default)]
pub struct InMemoryAreaRecords {
    records: Arc<RwLock<Vec<AdministrativeAreaRecord>>>,
}

impl InMemoryAreaRecords {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with records
    pub fn with_records(records: Vec<AdministrativeAreaRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Add a record
    pub async fn insert(&self, record: AdministrativeAreaRecord) {
        self.records.write().await.push(record);
    }

    /// Snapshot of all records
    pub async fn all(&self) -> Vec<AdministrativeAreaRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl AreaRecordRepository for InMemoryAreaRecords {
    async fn apply_issuance(
        &self,
        area_name: &str,
        update: &AreaIssuanceUpdate,
    ) -> Result<Option<Uuid>, RecordError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.matches_name(area_name)) else {
            return Ok(None);
        };

        record.latest_decree_number = Some(update.latest_decree_number.to_string());
        record.decree_expires_on = Some(update.decree_expires_on);
        Ok(Some(record.id))
    }
}
