//! Administrative area record port.
//!
//! Area records belong to the surrounding system. Issuance only ever touches
//! two fields on them: the latest decree number and the decree expiry date.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::decree::AreaIssuanceUpdate;

/// An administrative area as seen by the issuance pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministrativeAreaRecord {
    pub id: Uuid,
    pub name: String,
    pub latest_decree_number: Option<String>,
    pub decree_expires_on: Option<NaiveDate>,
}

impl AdministrativeAreaRecord {
    /// Creates a record that has never had a decree issued.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            latest_decree_number: None,
            decree_expires_on: None,
        }
    }

    /// Case-insensitive exact name match, ignoring surrounding whitespace.
    pub fn matches_name(&self, area_name: &str) -> bool {
        self.name.trim().to_lowercase() == area_name.trim().to_lowercase()
    }
}

/// Port for conditionally updating area records.
///
/// # Contract
///
/// Implementations must:
/// - Match area names as [`AdministrativeAreaRecord::matches_name`] does
/// - Apply both fields of an update in one write
/// - Report "no matching record" as `Ok(None)`, not as an error
#[async_trait]
pub trait AreaRecordRepository: Send + Sync {
    /// Writes the issued decree number and expiry to the matching record.
    ///
    /// Returns the updated record's id, or `None` if no record matched.
    async fn apply_issuance(
        &self,
        area_name: &str,
        update: &AreaIssuanceUpdate,
    ) -> Result<Option<Uuid>, RecordError>;
}

/// Errors from the area record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Record store write failed: {0}")]
    WriteFailed(String),
}

impl RecordError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a write failure error.
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed(message.into())
    }
}
