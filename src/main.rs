//! Decree Desk command line entry point.
//!
//! ```text
//! decree-desk <request.json>           issue a decree, print the result as JSON
//! decree-desk seed <year> <count>      raise a year's counter to an archive count
//! ```
//!
//! Both commands need `DECREE_DESK__DATABASE__URL`: counters held in memory
//! would restart at `001` on the next run and reissue taken numbers.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use decree_desk::adapters::{
    FileTemplateSource, HandlebarsTemplateEngine, LocalArtifactStorage, PostgresAreaRecords,
    PostgresSequenceStore, MIGRATOR,
};
use decree_desk::application::{
    IssueDecreeCommand, IssueDecreeHandler, SeedSequenceCommand, SeedSequenceHandler,
};
use decree_desk::config::{AppConfig, DatabaseConfig, LoggingConfig};
use decree_desk::domain::roster::DecreeRequest;
use decree_desk::ports::{AreaRecordRepository, SequenceCounterStore};

const USAGE: &str = "usage: decree-desk <request.json> | decree-desk seed <year> <count>";

#[derive(Debug, PartialEq)]
enum Command {
    Issue(PathBuf),
    Seed { year: i32, count: u32 },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, String> {
        match args {
            [path] if path != "seed" => Ok(Command::Issue(PathBuf::from(path))),
            [cmd, year, count] if cmd == "seed" => Ok(Command::Seed {
                year: year.parse().map_err(|_| format!("invalid year: {}", year))?,
                count: count.parse().map_err(|_| format!("invalid count: {}", count))?,
            }),
            _ => Err(USAGE.to_string()),
        }
    }
}

struct Stores {
    counters: Arc<dyn SequenceCounterStore>,
    records: Arc<dyn AreaRecordRepository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let stores = connect_stores(&config.database).await?;

    match command {
        Command::Issue(path) => {
            let raw = tokio::fs::read(&path).await?;
            let request: DecreeRequest = serde_json::from_slice(&raw)?;
            tracing::info!(path = %path.display(), area = %request.area_name, "Issuing decree");

            let mut storage = LocalArtifactStorage::new(&config.storage.output_dir)
                .with_max_bytes(config.storage.max_artifact_bytes);
            if let Some(url) = &config.storage.public_base_url {
                storage = storage.with_public_base_url(url);
            }

            let handler = IssueDecreeHandler::new(
                stores.counters,
                Arc::new(FileTemplateSource::new(&config.storage.template_path)),
                Arc::new(HandlebarsTemplateEngine::new()),
                Arc::new(storage),
                stores.records,
                config.issuance_settings()?,
            );

            let result = handler.handle(IssueDecreeCommand::new(request)).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Seed { year, count } => {
            let handler = SeedSequenceHandler::new(stores.counters, config.issuance.codes()?);
            let result = handler
                .handle(SeedSequenceCommand {
                    year,
                    issued_count: count,
                })
                .await?;
            println!("{} {} -> {}", result.scope, result.previous, result.current);
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    // stdout carries the result JSON, so logs go to stderr
    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn connect_stores(database: &DatabaseConfig) -> Result<Stores, Box<dyn std::error::Error>> {
    let url = database.connection_url()?;

    let pool = database.pool_options().connect(url).await?;
    tracing::info!("Connected to PostgreSQL");

    if database.run_migrations {
        MIGRATOR.run(&pool).await?;
        tracing::info!("Migrations applied");
    }

    Ok(Stores {
        counters: Arc::new(PostgresSequenceStore::new(pool.clone())),
        records: Arc::new(PostgresAreaRecords::new(pool)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_issue_command() {
        let command = Command::parse(&args(&["demos/request.json"])).unwrap();
        assert_eq!(command, Command::Issue(PathBuf::from("demos/request.json")));
    }

    #[test]
    fn parses_seed_command() {
        let command = Command::parse(&args(&["seed", "2025", "41"])).unwrap();
        assert_eq!(
            command,
            Command::Seed {
                year: 2025,
                count: 41
            }
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(Command::parse(&args(&[])), Err(USAGE.to_string()));
        assert_eq!(Command::parse(&args(&["seed"])), Err(USAGE.to_string()));
        assert!(Command::parse(&args(&["seed", "twenty", "1"]))
            .unwrap_err()
            .contains("invalid year"));
    }

    #[tokio::test]
    async fn refuses_to_run_without_a_database() {
        let result = connect_stores(&DatabaseConfig::default()).await;

        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("DECREE_DESK__DATABASE__URL"));
        assert!(message.contains("restart at 001"));
    }
}
