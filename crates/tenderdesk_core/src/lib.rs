//! Core domain logic for tenderdesk.
//!
//! Tender records, the list query engine, SQLite persistence, document
//! staging and dashboard aggregates.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod source;

pub use config::{AppConfig, ConfigError};
pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LoggingError,
};
pub use model::document::{DocumentId, DocumentRecord, NewDocument};
pub use model::tender::{
    NewTender, Tender, TenderId, TenderStatus, TenderValidationError, UnknownStatus,
};
pub use query::classify::{risk_level, status_tag, RiskLevel, StatusTag};
pub use query::engine::{apply_query, QueryParseError, SortKey, StatusFilter, TenderQuery};
pub use repo::document_repo::{DocumentRepository, SqliteDocumentRepository};
pub use repo::tender_repo::{RepoError, RepoResult, SqliteTenderRepository, TenderRepository};
pub use service::dashboard_service::{
    category_breakdown, status_breakdown, CategorySummary, DashboardStats,
};
pub use service::document_service::{DocumentError, DocumentService, UploadPolicy};
pub use service::estimator::{Estimate, EstimateInput, FallbackEstimator, RiskEstimator};
pub use service::tender_service::{TenderService, TenderServiceError};
pub use source::{load_with_fallback, DataOrigin, LoadedTenders, RepositorySource, SourceError, TenderSource};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
