//! Tender list query engine.
//!
//! # Responsibility
//! - Derive a display-ordered subset of tenders from a full list.
//!
//! # Invariants
//! - Pure: never mutates input, never errors, no state between calls.
//! - Sorting is stable; exact ties keep input order.
//! - `SortKey::Value` sorts descending, the other keys ascending.
//! - Float keys tie on numeric equality, so `-0.0` ties with `0.0`.

use crate::model::tender::{Tender, TenderStatus};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Status restriction applied before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TenderStatus),
}

impl StatusFilter {
    fn matches(self, status: TenderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }
}

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Earliest deadline first.
    #[default]
    Deadline,
    /// Largest value first.
    Value,
    /// Safest first.
    Risk,
}

/// Error for unrecognized filter or sort names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParseError {
    UnknownStatusFilter(String),
    UnknownSortKey(String),
}

impl Display for QueryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatusFilter(value) => write!(
                f,
                "unknown status filter `{value}`; expected all|active|pending|won|lost"
            ),
            Self::UnknownSortKey(value) => {
                write!(f, "unknown sort key `{value}`; expected deadline|value|risk")
            }
        }
    }
}

impl Error for QueryParseError {}

impl FromStr for StatusFilter {
    type Err = QueryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }
        value
            .parse::<TenderStatus>()
            .map(Self::Only)
            .map_err(|_| QueryParseError::UnknownStatusFilter(value.to_string()))
    }
}

impl FromStr for SortKey {
    type Err = QueryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "deadline" => Ok(Self::Deadline),
            "value" => Ok(Self::Value),
            "risk" => Ok(Self::Risk),
            other => Err(QueryParseError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Query parameters for one list recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenderQuery {
    /// Case-insensitive substring matched against title and client.
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort_key: SortKey,
}

impl TenderQuery {
    pub fn new(
        search_term: impl Into<String>,
        status_filter: StatusFilter,
        sort_key: SortKey,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            status_filter,
            sort_key,
        }
    }
}

/// Filters and orders `tenders` for display.
///
/// Returns references into `tenders`. Empty input yields empty output.
pub fn apply_query<'a>(tenders: &'a [Tender], query: &TenderQuery) -> Vec<&'a Tender> {
    let needle = query.search_term.to_lowercase();

    let mut view: Vec<&Tender> = tenders
        .iter()
        .filter(|tender| query.status_filter.matches(tender.status))
        .filter(|tender| matches_search(tender, needle.as_str()))
        .collect();

    match query.sort_key {
        SortKey::Deadline => view.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        SortKey::Value => {
            view.sort_by(|a, b| sort_float(b.value).total_cmp(&sort_float(a.value)))
        }
        SortKey::Risk => {
            view.sort_by(|a, b| sort_float(a.risk_score).total_cmp(&sort_float(b.risk_score)))
        }
    }

    view
}

/// `-0.0` and `0.0` must compare equal so they tie.
fn sort_float(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn matches_search(tender: &Tender, needle: &str) -> bool {
    needle.is_empty()
        || tender.title.to_lowercase().contains(needle)
        || tender.client.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{apply_query, SortKey, StatusFilter, TenderQuery};
    use crate::model::tender::TenderStatus;
    use crate::source::fixtures::fallback_tenders;

    fn ids(view: &[&crate::model::tender::Tender]) -> Vec<i64> {
        view.iter().map(|tender| tender.id).collect()
    }

    #[test]
    fn active_sorted_by_value_returns_largest_first() {
        let tenders = fallback_tenders();
        let query = TenderQuery::new("", StatusFilter::Only(TenderStatus::Active), SortKey::Value);
        assert_eq!(ids(&apply_query(&tenders, &query)), vec![1, 4]);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let tenders = fallback_tenders();
        let query = TenderQuery::new("water", StatusFilter::All, SortKey::Deadline);
        assert_eq!(ids(&apply_query(&tenders, &query)), vec![5]);
    }

    #[test]
    fn search_matches_client() {
        let tenders = fallback_tenders();
        let query = TenderQuery::new("CITY council", StatusFilter::All, SortKey::Deadline);
        assert_eq!(ids(&apply_query(&tenders, &query)), vec![2]);
    }

    #[test]
    fn default_query_orders_by_deadline() {
        let tenders = fallback_tenders();
        let view = apply_query(&tenders, &TenderQuery::default());
        assert_eq!(ids(&view), vec![5, 2, 1, 4, 3]);
    }

    #[test]
    fn risk_sort_is_stable_for_ties() {
        let mut tenders = fallback_tenders();
        for tender in &mut tenders {
            tender.risk_score = 0.5;
        }
        let query = TenderQuery::new("", StatusFilter::All, SortKey::Risk);
        assert_eq!(ids(&apply_query(&tenders, &query)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn parses_filter_and_sort_names() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "won".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(TenderStatus::Won)
        );
        assert!("Won".parse::<StatusFilter>().is_err());
        assert_eq!("risk".parse::<SortKey>().unwrap(), SortKey::Risk);
        assert!("title".parse::<SortKey>().is_err());
    }
}
