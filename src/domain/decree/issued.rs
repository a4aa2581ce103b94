//! Issuance outputs: the stored artifact and the record write-back.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

use crate::domain::foundation::Timestamp;
use crate::domain::numbering::IssuedIdentifier;

/// Where a rendered decree was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRef {
    pub path: PathBuf,
    /// Public link, when the artifact directory is served.
    pub url: Option<String>,
    /// Hex-encoded SHA-256 of the artifact bytes.
    pub checksum: String,
    pub size_bytes: u64,
}

/// A decree that has been rendered and stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDecree {
    pub identifier: IssuedIdentifier,
    pub artifact: ArtifactRef,
    pub generated_at: Timestamp,
}

/// Values written back to the administrative record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaIssuanceUpdate {
    pub latest_decree_number: IssuedIdentifier,
    pub decree_expires_on: NaiveDate,
}

/// Outcome of the commit phase.
///
/// The decree is already rendered when this is decided, so none of these
/// abort issuance; callers must inspect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommitStatus {
    Committed { record_id: String },
    RecordNotFound { area_name: String },
    Failed { reason: String },
}

impl CommitStatus {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitStatus::Committed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_status_serializes_with_tag() {
        let status = CommitStatus::RecordNotFound {
            area_name: "Sample District".into(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "record_not_found");
        assert_eq!(json["area_name"], "Sample District");
    }

    #[test]
    fn only_committed_counts_as_committed() {
        assert!(CommitStatus::Committed {
            record_id: "1".into()
        }
        .is_committed());
        assert!(!CommitStatus::Failed {
            reason: "down".into()
        }
        .is_committed());
    }
}
