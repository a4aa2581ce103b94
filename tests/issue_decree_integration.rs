//! Integration tests for the decree issuance pipeline.
//!
//! These tests drive `IssueDecreeHandler` end to end with:
//! 1. The shipped template read from `templates/decree.txt`
//! 2. The handlebars engine in strict mode
//! 3. Filesystem artifact storage in a temp directory
//! 4. In-memory counters and area records
//!
//! No database is required.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use tempfile::TempDir;

use decree_desk::adapters::{
    FileTemplateSource, HandlebarsTemplateEngine, InMemoryAreaRecords, InMemorySequenceStore,
    LocalArtifactStorage,
};
use decree_desk::application::{
    IssuanceSettings, IssueDecreeCommand, IssueDecreeError, IssueDecreeHandler,
    SeedSequenceCommand, SeedSequenceHandler,
};
use decree_desk::domain::decree::CommitStatus;
use decree_desk::domain::foundation::Timestamp;
use decree_desk::domain::numbering::IssuanceCodes;
use decree_desk::domain::roster::{DecreeRequest, LeaderName};
use decree_desk::ports::{AdministrativeAreaRecord, ArtifactStorage, StorageError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn demo_request() -> DecreeRequest {
    let raw = std::fs::read(manifest_path("demos/request.json")).unwrap();
    serde_json::from_slice(&raw).unwrap()
}

fn codes() -> IssuanceCodes {
    IssuanceCodes::new("PC", "A.II", "L-1", "IX").unwrap()
}

fn settings() -> IssuanceSettings {
    IssuanceSettings {
        codes: codes(),
        validity_years: 5,
        utc_offset: FixedOffset::east_opt(7 * 3600).unwrap(),
    }
}

fn at(s: &str) -> Timestamp {
    Timestamp::from_datetime(DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc))
}

struct Pipeline {
    _dir: TempDir,
    handler: IssueDecreeHandler,
    counters: InMemorySequenceStore,
    storage: Arc<LocalArtifactStorage>,
    records: InMemoryAreaRecords,
}

fn pipeline_with_template(template: PathBuf) -> Pipeline {
    let dir = TempDir::new().unwrap();
    let counters = InMemorySequenceStore::new();
    let records =
        InMemoryAreaRecords::with_records(vec![AdministrativeAreaRecord::new("Sample District")]);
    let storage = Arc::new(
        LocalArtifactStorage::new(dir.path().join("decrees"))
            .with_public_base_url("https://files.example.com/decrees"),
    );

    let handler = IssueDecreeHandler::new(
        Arc::new(counters.clone()),
        Arc::new(FileTemplateSource::new(template)),
        Arc::new(HandlebarsTemplateEngine::new()),
        storage.clone(),
        Arc::new(records.clone()),
        settings(),
    );

    Pipeline {
        _dir: dir,
        handler,
        counters,
        storage,
        records,
    }
}

fn pipeline() -> Pipeline {
    pipeline_with_template(manifest_path("templates/decree.txt"))
}

/// A handler writing into an existing output directory with a counter that
/// starts from zero, as a fresh process without a database would.
fn restarted_handler(p: &Pipeline) -> IssueDecreeHandler {
    IssueDecreeHandler::new(
        Arc::new(InMemorySequenceStore::new()),
        Arc::new(FileTemplateSource::new(manifest_path("templates/decree.txt"))),
        Arc::new(HandlebarsTemplateEngine::new()),
        p.storage.clone(),
        Arc::new(p.records.clone()),
        settings(),
    )
}

async fn sample_district(records: &InMemoryAreaRecords) -> AdministrativeAreaRecord {
    records
        .all()
        .await
        .into_iter()
        .find(|r| r.matches_name("Sample District"))
        .unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn issues_demo_request_end_to_end() {
    let p = pipeline();

    let result = p
        .handler
        .handle(IssueDecreeCommand::at(demo_request(), at("2025-01-10T03:00:00Z")))
        .await
        .unwrap();

    assert_eq!(result.identifier.as_str(), "001/PC/A.II/L-1/IX/I/25");
    assert_eq!(result.issued_on, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    assert_eq!(result.expires_on, NaiveDate::from_ymd_opt(2030, 1, 10).unwrap());
    assert!(result.commit.is_committed());

    let artifact = &result.rendered.artifact;
    assert_eq!(
        artifact.path.file_name().and_then(|n| n.to_str()),
        Some("001-PC-A.II-L-1-IX-I-25.txt")
    );
    assert_eq!(
        artifact.url.as_deref(),
        Some("https://files.example.com/decrees/001-PC-A.II-L-1-IX-I-25.txt")
    );
    assert_eq!(artifact.checksum.len(), 64);

    let content = std::fs::read_to_string(&artifact.path).unwrap();

    assert!(content.contains("Nomor: 001/PC/A.II/L-1/IX/I/25"));
    assert!(content.contains("SUSUNAN PENGURUS SAMPLE DISTRICT"));
    assert!(content.contains("MASA BAKTI 10 Januari 2025 - 10 Januari 2030"));
    assert!(content.contains("Pada tanggal  : 10 Januari 2025"));
    assert!(content.contains("10 Rajab 1446"));
    assert!(content.contains("1. H. Abdullah\n2. KH. Mahmud\n"));
    assert!(content.contains("Ketua          : Ahmad Fauzi"));
    assert!(content.contains("Wakil Ketua    : Rahmat\n"));
    assert!(content.contains("* Da'wah (Koordinator: Yusuf)"));
    assert!(content.contains("  Ali\n  Umar\n"));
    assert!(!content.contains("(Koordinator: )"));
    assert!(content.contains("Komandan: Hamzah"));
    assert!(content.contains("Wakil Komandan: Bilal\n"));
    assert!(content.contains("* Logistik (Kepala: Salman)"));
    assert!(!content.contains("(Kepala: )"));
    assert!(content.contains("AHMAD FAUZI"));

    let record = sample_district(&p.records).await;
    assert_eq!(
        record.latest_decree_number.as_deref(),
        Some("001/PC/A.II/L-1/IX/I/25")
    );
    assert_eq!(record.decree_expires_on, Some(result.expires_on));
}

#[tokio::test]
async fn numbering_continues_and_restarts_per_year() {
    let p = pipeline();

    let first = p
        .handler
        .handle(IssueDecreeCommand::at(demo_request(), at("2025-05-02T03:00:00Z")))
        .await
        .unwrap();
    let second = p
        .handler
        .handle(IssueDecreeCommand::at(demo_request(), at("2025-11-20T03:00:00Z")))
        .await
        .unwrap();
    let next_year = p
        .handler
        .handle(IssueDecreeCommand::at(demo_request(), at("2026-01-03T03:00:00Z")))
        .await
        .unwrap();

    assert_eq!(first.identifier.as_str(), "001/PC/A.II/L-1/IX/V/25");
    assert_eq!(second.identifier.as_str(), "002/PC/A.II/L-1/IX/XI/25");
    assert_eq!(next_year.identifier.as_str(), "001/PC/A.II/L-1/IX/I/26");

    let record = sample_district(&p.records).await;
    assert_eq!(
        record.latest_decree_number.as_deref(),
        Some("001/PC/A.II/L-1/IX/I/26")
    );
}

#[tokio::test]
async fn seeded_counter_continues_after_archive() {
    let p = pipeline();
    SeedSequenceHandler::new(Arc::new(p.counters.clone()), codes())
        .handle(SeedSequenceCommand {
            year: 2025,
            issued_count: 41,
        })
        .await
        .unwrap();

    let result = p
        .handler
        .handle(IssueDecreeCommand::at(demo_request(), at("2025-02-14T03:00:00Z")))
        .await
        .unwrap();

    assert_eq!(result.identifier.as_str(), "042/PC/A.II/L-1/IX/II/25");
}

#[tokio::test]
async fn unmatched_area_keeps_artifact_and_reports_status() {
    let p = pipeline();
    let mut request = demo_request();
    request.area_name = "Unregistered Village".to_string();

    let result = p
        .handler
        .handle(IssueDecreeCommand::at(request, at("2025-01-10T03:00:00Z")))
        .await
        .unwrap();

    assert!(matches!(result.commit, CommitStatus::RecordNotFound { .. }));
    assert!(p
        .storage
        .exists("001-PC-A.II-L-1-IX-I-25.txt")
        .await
        .unwrap());

    let untouched = p.records.all().await;
    assert!(untouched[0].latest_decree_number.is_none());
}

#[tokio::test]
async fn missing_template_writes_nothing() {
    let p = pipeline_with_template(manifest_path("templates/absent.txt"));

    let result = p
        .handler
        .handle(IssueDecreeCommand::at(demo_request(), at("2025-01-10T03:00:00Z")))
        .await;

    assert!(matches!(result, Err(IssueDecreeError::Template(_))));
    assert!(!p
        .storage
        .exists("001-PC-A.II-L-1-IX-I-25.txt")
        .await
        .unwrap());
    let record = sample_district(&p.records).await;
    assert!(record.latest_decree_number.is_none());
    assert!(record.decree_expires_on.is_none());
}

#[tokio::test]
async fn restarted_counter_cannot_overwrite_issued_decree() {
    let p = pipeline();
    let first = p
        .handler
        .handle(IssueDecreeCommand::at(demo_request(), at("2025-01-10T03:00:00Z")))
        .await
        .unwrap();
    let issued_bytes = std::fs::read(&first.rendered.artifact.path).unwrap();

    let mut request = demo_request();
    request.chair = LeaderName::new("Someone Else");
    let second = restarted_handler(&p)
        .handle(IssueDecreeCommand::at(request, at("2025-01-11T03:00:00Z")))
        .await;

    assert!(matches!(
        second,
        Err(IssueDecreeError::Storage(StorageError::AlreadyExists { .. }))
    ));
    assert_eq!(
        std::fs::read(&first.rendered.artifact.path).unwrap(),
        issued_bytes
    );
    let record = sample_district(&p.records).await;
    assert_eq!(
        record.latest_decree_number.as_deref(),
        Some("001/PC/A.II/L-1/IX/I/25")
    );
}

#[tokio::test]
async fn storage_refuses_second_write_of_a_name() {
    let p = pipeline();

    p.storage.store("x.txt", b"first").await.unwrap();
    let again = p.storage.store("x.txt", b"second").await;

    assert_eq!(again, Err(StorageError::already_exists("x.txt")));
    assert_eq!(std::fs::read(p.storage.file_path("x.txt")).unwrap(), b"first");
}

#[tokio::test]
async fn result_serializes_for_the_cli() {
    let p = pipeline();

    let result = p
        .handler
        .handle(IssueDecreeCommand::at(demo_request(), at("2025-01-10T03:00:00Z")))
        .await
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["identifier"], "001/PC/A.II/L-1/IX/I/25");
    assert_eq!(json["expires_on"], "2030-01-10");
    assert_eq!(json["commit"]["status"], "committed");
}
