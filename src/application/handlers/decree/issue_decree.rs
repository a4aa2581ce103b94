//! IssueDecreeHandler - Command handler for issuing a decree letter.
//!
//! Runs the issuance pipeline in two phases:
//!
//! 1. **Render** - allocate a number, format the identifier, date the decree
//!    in both calendars, normalize the roster, merge the template and store
//!    the artifact. Any failure here aborts issuance, including an artifact
//!    name that is already taken.
//! 2. **Commit** - write the identifier and expiry back to the area record.
//!    The artifact already exists at this point, so the outcome is returned
//!    as a [`CommitStatus`] instead of an error.

use std::sync::Arc;

use chrono::{Datelike, FixedOffset, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::domain::calendar::format_issuance_dates;
use crate::domain::decree::{
    AreaIssuanceUpdate, CommitStatus, DecreeFields, FieldSources, RenderedDecree, ValidityPeriod,
};
use crate::domain::foundation::{DecreeId, Timestamp};
use crate::domain::numbering::{IssuanceCodes, IssuedIdentifier};
use crate::domain::roster::{DecreeRequest, NormalizedRoster};
use crate::ports::{
    AllocationError, AreaRecordRepository, ArtifactStorage, SequenceCounterStore, StorageError,
    TemplateEngine, TemplateError, TemplateSource,
};

/// Extension used when the template file name has none.
const DEFAULT_ARTIFACT_EXTENSION: &str = "txt";

/// Command to issue one decree.
#[derive(Debug, Clone)]
pub struct IssueDecreeCommand {
    pub request: DecreeRequest,
    /// Moment of issuance. Its local date drives numbering and dating.
    pub issued_at: Timestamp,
}

impl IssueDecreeCommand {
    /// Creates a command issued now.
    pub fn new(request: DecreeRequest) -> Self {
        Self {
            request,
            issued_at: Timestamp::now(),
        }
    }

    /// Creates a command with a fixed issuance time.
    pub fn at(request: DecreeRequest, issued_at: Timestamp) -> Self {
        Self { request, issued_at }
    }
}

/// Result of a successful issuance.
#[derive(Debug, Clone, Serialize)]
pub struct IssueDecreeResult {
    pub decree_id: DecreeId,
    pub identifier: IssuedIdentifier,
    pub rendered: RenderedDecree,
    pub issued_on: NaiveDate,
    pub expires_on: NaiveDate,
    pub commit: CommitStatus,
}

/// Fatal issuance errors. Nothing has been written back when one is returned.
#[derive(Debug, Clone, Error)]
pub enum IssueDecreeError {
    #[error("Sequence allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Artifact storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Fixed parameters of every issuance.
#[derive(Debug, Clone)]
pub struct IssuanceSettings {
    pub codes: IssuanceCodes,
    /// Years a decree stays valid after its period start.
    pub validity_years: u32,
    /// Offset used to turn the issuance instant into a calendar date.
    pub utc_offset: FixedOffset,
}

/// Handler for issuing decrees.
///
/// # Dependencies
///
/// - `SequenceCounterStore`: Allocate the decree number
/// - `TemplateSource`: Load the decree template
/// - `TemplateEngine`: Merge fields into the template
/// - `ArtifactStorage`: Store the rendered decree
/// - `AreaRecordRepository`: Write the issuance back to the area record
///
/// # Usage
///
/// ```rust,ignore
/// let handler = IssueDecreeHandler::new(counters, templates, engine, storage, records, settings);
/// let result = handler.handle(IssueDecreeCommand::new(request)).await?;
/// if !result.commit.is_committed() {
///     // the decree exists but the area record was not updated
/// }
/// ```
pub struct IssueDecreeHandler {
    counters: Arc<dyn SequenceCounterStore>,
    template_source: Arc<dyn TemplateSource>,
    template_engine: Arc<dyn TemplateEngine>,
    artifact_storage: Arc<dyn ArtifactStorage>,
    area_records: Arc<dyn AreaRecordRepository>,
    settings: IssuanceSettings,
}

impl IssueDecreeHandler {
    pub fn new(
        counters: Arc<dyn SequenceCounterStore>,
        template_source: Arc<dyn TemplateSource>,
        template_engine: Arc<dyn TemplateEngine>,
        artifact_storage: Arc<dyn ArtifactStorage>,
        area_records: Arc<dyn AreaRecordRepository>,
        settings: IssuanceSettings,
    ) -> Self {
        Self {
            counters,
            template_source,
            template_engine,
            artifact_storage,
            area_records,
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: IssueDecreeCommand,
    ) -> Result<IssueDecreeResult, IssueDecreeError> {
        let decree_id = DecreeId::new();
        let request = &cmd.request;
        let issued_on = cmd.issued_at.local_date(self.settings.utc_offset);

        // 1. Allocate the next number in this year's series
        let scope = self.settings.codes.scope_for_year(issued_on.year());
        let sequence = self.counters.next_value(&scope).await.map_err(|e| {
            tracing::error!(%decree_id, scope = %scope, error = %e, "Sequence allocation failed");
            e
        })?;

        // 2. Format the identifier
        let identifier = IssuedIdentifier::format(sequence, &self.settings.codes, issued_on);

        // 3. Dates and validity window
        let issued = format_issuance_dates(issued_on);
        let validity = ValidityPeriod::from_request(
            &request.period_start,
            issued_on,
            self.settings.validity_years,
        );

        // 4. Normalize the roster and assemble template fields
        let roster = NormalizedRoster::from_request(request);
        let fields = DecreeFields::assemble(FieldSources {
            request,
            roster: &roster,
            identifier: &identifier,
            issued: &issued,
            expires_on: validity.expires_on,
        });

        // 5. Render and store
        let rendered = self
            .render(&identifier, &fields, cmd.issued_at)
            .await
            .map_err(|e| {
                tracing::error!(%decree_id, identifier = %identifier, error = %e, "Decree rendering failed");
                e
            })?;

        tracing::info!(
            %decree_id,
            identifier = %identifier,
            area = %fields.area_name,
            path = %rendered.artifact.path.display(),
            "Decree rendered"
        );

        // 6. Commit to the area record
        let update = AreaIssuanceUpdate {
            latest_decree_number: identifier.clone(),
            decree_expires_on: validity.expires_on,
        };
        let commit = self.commit(&decree_id, &fields.area_name, &update).await;

        Ok(IssueDecreeResult {
            decree_id,
            identifier,
            rendered,
            issued_on,
            expires_on: validity.expires_on,
            commit,
        })
    }

    async fn render(
        &self,
        identifier: &IssuedIdentifier,
        fields: &DecreeFields,
        generated_at: Timestamp,
    ) -> Result<RenderedDecree, IssueDecreeError> {
        let template = self.template_source.load().await?;
        let extension = template.extension().unwrap_or(DEFAULT_ARTIFACT_EXTENSION);
        let file_name = format!("{}.{}", identifier.file_stem(), extension);

        // A taken name means the counter was reset; never replace an issued decree.
        if self.artifact_storage.exists(&file_name).await? {
            return Err(StorageError::already_exists(file_name).into());
        }

        let content = self
            .template_engine
            .merge(&template.content, &fields.to_value())?;
        let artifact = self.artifact_storage.store(&file_name, &content).await?;

        Ok(RenderedDecree {
            identifier: identifier.clone(),
            artifact,
            generated_at,
        })
    }

    async fn commit(
        &self,
        decree_id: &DecreeId,
        area_name: &str,
        update: &AreaIssuanceUpdate,
    ) -> CommitStatus {
        match self.area_records.apply_issuance(area_name, update).await {
            Ok(Some(record_id)) => {
                tracing::info!(%decree_id, %record_id, area = area_name, "Area record updated");
                CommitStatus::Committed {
                    record_id: record_id.to_string(),
                }
            }
            Ok(None) => {
                tracing::warn!(%decree_id, area = area_name, "No area record matched; decree issued without write-back");
                CommitStatus::RecordNotFound {
                    area_name: area_name.to_string(),
                }
            }
            Err(e) => {
                tracing::error!(%decree_id, area = area_name, error = %e, "Area record write-back failed");
                CommitStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
