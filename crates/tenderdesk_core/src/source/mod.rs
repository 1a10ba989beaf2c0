//! Tender data sources and the fallback-on-failure policy.
//!
//! # Responsibility
//! - Fetch the full tender list from a live source.
//! - Substitute the canned fixture list when the fetch fails.
//!
//! # Invariants
//! - The query engine never sees a fetch error; callers get a well-formed
//!   list plus its [`DataOrigin`].

pub mod fixtures;

use crate::model::tender::Tender;
use crate::repo::tender_repo::{RepoError, TenderRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum SourceError {
    Repo(RepoError),
    /// Source could not be reached at all.
    Unavailable(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "tender source unavailable: {message}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<RepoError> for SourceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Supplier of the full tender list.
pub trait TenderSource {
    fn fetch_tenders(&self) -> Result<Vec<Tender>, SourceError>;
}

/// Live source backed by a tender repository.
pub struct RepositorySource<R: TenderRepository> {
    repo: R,
}

impl<R: TenderRepository> RepositorySource<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: TenderRepository> TenderSource for RepositorySource<R> {
    fn fetch_tenders(&self) -> Result<Vec<Tender>, SourceError> {
        Ok(self.repo.list_tenders()?)
    }
}

/// Where a loaded list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTenders {
    pub tenders: Vec<Tender>,
    pub origin: DataOrigin,
}

/// Fetches from `source`, falling back to [`fixtures::fallback_tenders`].
pub fn load_with_fallback<S: TenderSource + ?Sized>(source: &S) -> LoadedTenders {
    match source.fetch_tenders() {
        Ok(tenders) => {
            info!(
                "event=tenders_load module=source status=ok origin=live count={}",
                tenders.len()
            );
            LoadedTenders {
                tenders,
                origin: DataOrigin::Live,
            }
        }
        Err(err) => {
            warn!("event=tenders_load module=source status=fallback error={err}");
            LoadedTenders {
                tenders: fixtures::fallback_tenders(),
                origin: DataOrigin::Fallback,
            }
        }
    }
}
