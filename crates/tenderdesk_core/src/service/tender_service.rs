//! Tender use-case service.
//!
//! # Responsibility
//! - Turn create requests into validated, scored tender records.
//! - Serve filtered/sorted list views through the query engine.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - New tenders start `active` with `submission_date = today`.

use crate::model::tender::{NewTender, Tender, TenderId, TenderStatus, DEFAULT_CATEGORY};
use crate::query::engine::{apply_query, TenderQuery};
use crate::repo::tender_repo::{RepoError, RepoResult, TenderRepository};
use crate::service::estimator::{EstimateInput, RiskEstimator};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for tender use-cases.
#[derive(Debug)]
pub enum TenderServiceError {
    /// A required create field is blank.
    MissingField(&'static str),
    TenderNotFound(TenderId),
    Repo(RepoError),
    /// Write succeeded but read-back did not find the row.
    InconsistentState(&'static str),
}

impl Display for TenderServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::TenderNotFound(id) => write!(f, "tender not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent tender state: {details}"),
        }
    }
}

impl Error for TenderServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TenderServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TenderNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Tender service facade over a repository and an estimator.
pub struct TenderService<R: TenderRepository, E: RiskEstimator> {
    repo: R,
    estimator: E,
}

impl<R: TenderRepository, E: RiskEstimator> TenderService<R, E> {
    pub fn new(repo: R, estimator: E) -> Self {
        Self { repo, estimator }
    }

    /// Creates a tender, scoring it with the configured estimator.
    ///
    /// # Errors
    /// - `MissingField` for a blank title or client.
    /// - `Repo(Validation)` for a negative value.
    pub fn create_tender(
        &self,
        request: &NewTender,
        today: NaiveDate,
    ) -> Result<Tender, TenderServiceError> {
        if request.title.trim().is_empty() {
            return Err(TenderServiceError::MissingField("title"));
        }
        if request.client.trim().is_empty() {
            return Err(TenderServiceError::MissingField("client"));
        }

        let category = request
            .category
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();

        let estimate = self
            .estimator
            .estimate(&EstimateInput {
                value: request.value,
                days_to_deadline: (request.deadline - today).num_days(),
                category: category.clone(),
            })
            .clamped();

        let tender = Tender {
            id: 0,
            title: request.title.trim().to_string(),
            description: request.description.clone(),
            client: request.client.trim().to_string(),
            category,
            value: request.value,
            deadline: request.deadline,
            submission_date: today,
            status: TenderStatus::Active,
            risk_score: estimate.risk_score,
            profit_prediction: estimate.profit_prediction,
        };

        let id = self.repo.create_tender(&tender)?;
        info!("event=tender_create module=service status=ok tender_id={id}");

        self.repo
            .get_tender(id)?
            .ok_or(TenderServiceError::InconsistentState(
                "created tender not found in read-back",
            ))
    }

    pub fn get_tender(&self, id: TenderId) -> RepoResult<Option<Tender>> {
        self.repo.get_tender(id)
    }

    /// Loads all tenders and returns the ordered view for `query`.
    pub fn list_view(&self, query: &TenderQuery) -> RepoResult<Vec<Tender>> {
        let tenders = self.repo.list_tenders()?;
        Ok(apply_query(&tenders, query).into_iter().cloned().collect())
    }

    pub fn set_status(
        &self,
        id: TenderId,
        status: TenderStatus,
    ) -> Result<Tender, TenderServiceError> {
        self.repo.update_status(id, status)?;
        info!("event=tender_status module=service status=ok tender_id={id} new_status={status}");
        self.repo
            .get_tender(id)?
            .ok_or(TenderServiceError::InconsistentState(
                "updated tender not found in read-back",
            ))
    }

    pub fn delete_tender(&self, id: TenderId) -> Result<(), TenderServiceError> {
        self.repo.delete_tender(id)?;
        info!("event=tender_delete module=service status=ok tender_id={id}");
        Ok(())
    }
}
