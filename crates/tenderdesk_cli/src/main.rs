//! `tenderdesk` command-line entry point.
//!
//! Usage:
//!   tenderdesk seed
//!   tenderdesk list --search water --status all --sort value
//!   tenderdesk show 3
//!   tenderdesk create --title "..." --client "..." --value 120000 --deadline 2024-06-30
//!   tenderdesk status 3 won
//!   tenderdesk attach 3 ./Tender_Specification.pdf
//!   tenderdesk delete 3
//!   tenderdesk stats --format json

mod cli;
mod output;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use tenderdesk_core::db::{open_db, open_existing_db};
use tenderdesk_core::source::fixtures::fallback_tenders;
use tenderdesk_core::{
    apply_query, category_breakdown, core_version, init_logging, init_stderr_logging,
    load_with_fallback,
    status_breakdown, AppConfig, DashboardStats, DataOrigin, DocumentService, FallbackEstimator,
    NewTender, SortKey, SourceError, SqliteDocumentRepository, SqliteTenderRepository,
    StatusFilter, Tender, TenderQuery, TenderRepository, TenderService, TenderSource,
    TenderStatus,
};

use cli::{Cli, Commands};

/// Opens the database per fetch so a missing or unreadable file counts as a
/// fetch failure rather than a hard error. Never creates the file.
struct DatabaseSource {
    path: PathBuf,
}

impl TenderSource for DatabaseSource {
    fn fetch_tenders(&self) -> Result<Vec<Tender>, SourceError> {
        let conn = open_existing_db(&self.path)
            .map_err(|err| SourceError::Unavailable(err.to_string()))?;
        Ok(SqliteTenderRepository::new(&conn).list_tenders()?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        config.database_path = db.clone();
    }
    setup_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Seed => seed(&config.database_path),
        Commands::List {
            search,
            status,
            sort,
        } => {
            let query = TenderQuery::new(
                search,
                status.parse::<StatusFilter>()?,
                sort.parse::<SortKey>()?,
            );
            let loaded = load_tenders(&config.database_path);
            let view = apply_query(&loaded.tenders, &query);
            output::print_tenders(cli.format, &view)
        }
        Commands::Show { id } => {
            let conn = open_existing_db(&config.database_path)?;
            let tender = SqliteTenderRepository::new(&conn)
                .get_tender(id)?
                .with_context(|| format!("tender {id} not found"))?;
            let documents =
                DocumentService::new(SqliteDocumentRepository::new(&conn), config.upload_policy())
                    .list(id)?;
            output::print_tender_detail(cli.format, &tender, &documents)
        }
        Commands::Create {
            title,
            client,
            value,
            deadline,
            category,
            description,
        } => {
            let deadline = NaiveDate::parse_from_str(&deadline, "%Y-%m-%d")
                .with_context(|| format!("invalid deadline `{deadline}`, expected YYYY-MM-DD"))?;
            let request = NewTender {
                title,
                description,
                client,
                value,
                deadline,
                category,
            };
            let conn = open_db(&config.database_path)?;
            let service = TenderService::new(SqliteTenderRepository::new(&conn), FallbackEstimator);
            let tender = service.create_tender(&request, Local::now().date_naive())?;
            output::print_tender_detail(cli.format, &tender, &[])
        }
        Commands::Status { id, status } => {
            let status = status.parse::<TenderStatus>()?;
            let conn = open_existing_db(&config.database_path)?;
            let service = TenderService::new(SqliteTenderRepository::new(&conn), FallbackEstimator);
            let tender = service.set_status(id, status)?;
            output::print_tender_detail(cli.format, &tender, &[])
        }
        Commands::Delete { id } => {
            let conn = open_existing_db(&config.database_path)?;
            let documents =
                DocumentService::new(SqliteDocumentRepository::new(&conn), config.upload_policy());
            let stored = documents.list(id)?;
            TenderService::new(SqliteTenderRepository::new(&conn), FallbackEstimator)
                .delete_tender(id)?;
            let removed = documents.remove_stored_files(&stored);
            println!("deleted tender {id} and {removed} stored file(s)");
            Ok(())
        }
        Commands::Attach { id, path } => {
            let bytes =
                std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .with_context(|| format!("{} has no usable file name", path.display()))?;
            let conn = open_existing_db(&config.database_path)?;
            let service =
                DocumentService::new(SqliteDocumentRepository::new(&conn), config.upload_policy());
            let record = service.upload(id, file_name, &bytes)?;
            println!(
                "attached {} to tender {} as {}",
                record.original_name, record.tender_id, record.stored_name
            );
            Ok(())
        }
        Commands::Stats => {
            let loaded = load_tenders(&config.database_path);
            let stats = DashboardStats::from_tenders(&loaded.tenders);
            output::print_stats(
                cli.format,
                &stats,
                &category_breakdown(&loaded.tenders),
                &status_breakdown(&loaded.tenders),
            )
        }
        Commands::Version => {
            println!("tenderdesk {}", core_version());
            Ok(())
        }
    }
}

/// File logging when `logging.dir` is set; otherwise stderr, which stays at
/// `error` unless raised with `-v`.
fn setup_logging(config: &AppConfig, verbose: u8) -> Result<()> {
    match (config.logging.dir.as_deref(), verbose) {
        (Some(dir), 0) => init_logging(&config.logging.level, dir)?,
        (Some(dir), 1) => init_logging("debug", dir)?,
        (Some(dir), _) => init_logging("trace", dir)?,
        (None, 0) => init_stderr_logging("error")?,
        (None, 1) => init_stderr_logging("debug")?,
        (None, _) => init_stderr_logging("trace")?,
    }
    Ok(())
}

fn load_tenders(database_path: &Path) -> tenderdesk_core::LoadedTenders {
    let loaded = load_with_fallback(&DatabaseSource {
        path: database_path.to_path_buf(),
    });
    if loaded.origin == DataOrigin::Fallback {
        eprintln!("warning: tender data unavailable, showing sample data");
    }
    loaded
}

fn seed(database_path: &Path) -> Result<()> {
    let conn = open_db(database_path)?;
    let repo = SqliteTenderRepository::new(&conn);

    let existing = repo.list_tenders()?.len();
    if existing > 0 {
        bail!("database already holds {existing} tender(s); refusing to seed");
    }

    let mut inserted = 0;
    for tender in fallback_tenders() {
        repo.create_tender(&tender)?;
        inserted += 1;
    }
    info!("event=seed module=cli status=ok count={inserted}");
    println!("seeded {inserted} tender(s) into {}", database_path.display());
    Ok(())
}
