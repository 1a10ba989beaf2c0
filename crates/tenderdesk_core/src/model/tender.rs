//! Tender domain model.
//!
//! # Responsibility
//! - Define the canonical procurement tender record.
//! - Validate score/value ranges before records reach storage or views.
//!
//! # Invariants
//! - `risk_score` and `profit_prediction` are always within `[0, 1]`.
//! - `value` is finite and non-negative.
//! - `status` is one of the four lifecycle states.

use crate::query::classify::StatusTag;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Storage-assigned tender identifier.
pub type TenderId = i64;

/// Category assigned when the creator leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Bid/award lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenderStatus {
    /// Open for bidding; default for new tenders.
    Active,
    /// Bid submitted, awaiting decision.
    Pending,
    Won,
    Lost,
}

impl TenderStatus {
    /// All statuses in display order.
    pub const ALL: [TenderStatus; 4] = [
        TenderStatus::Active,
        TenderStatus::Pending,
        TenderStatus::Won,
        TenderStatus::Lost,
    ];

    /// Lowercase wire/storage name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Presentation tag used by list and detail views.
    pub fn tag(self) -> StatusTag {
        match self {
            Self::Won => StatusTag::Success,
            Self::Active => StatusTag::Info,
            Self::Pending => StatusTag::Warning,
            Self::Lost => StatusTag::Danger,
        }
    }
}

impl Display for TenderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown tender status `{}`; expected active|pending|won|lost",
            self.0
        )
    }
}

impl Error for UnknownStatus {}

impl FromStr for TenderStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Validation failures for [`Tender`] records.
#[derive(Debug, Clone, PartialEq)]
pub enum TenderValidationError {
    BlankTitle,
    BlankClient,
    /// Value is negative, NaN or infinite.
    InvalidValue(f64),
    RiskScoreOutOfRange(f64),
    ProfitPredictionOutOfRange(f64),
}

impl Display for TenderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "tender title must not be blank"),
            Self::BlankClient => write!(f, "tender client must not be blank"),
            Self::InvalidValue(value) => {
                write!(f, "tender value must be a non-negative amount, got {value}")
            }
            Self::RiskScoreOutOfRange(score) => {
                write!(f, "risk score must be within [0, 1], got {score}")
            }
            Self::ProfitPredictionOutOfRange(fraction) => {
                write!(f, "profit prediction must be within [0, 1], got {fraction}")
            }
        }
    }
}

impl Error for TenderValidationError {}

/// Canonical procurement tender record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: TenderId,
    pub title: String,
    pub description: String,
    pub client: String,
    pub category: String,
    /// Monetary amount; currency is implicit.
    pub value: f64,
    pub deadline: NaiveDate,
    pub submission_date: NaiveDate,
    pub status: TenderStatus,
    /// Estimated likelihood of adverse outcome, lower is safer.
    pub risk_score: f64,
    /// Forecast profit margin as a fraction.
    pub profit_prediction: f64,
}

impl Tender {
    /// Checks field-level invariants.
    pub fn validate(&self) -> Result<(), TenderValidationError> {
        if self.title.trim().is_empty() {
            return Err(TenderValidationError::BlankTitle);
        }
        if self.client.trim().is_empty() {
            return Err(TenderValidationError::BlankClient);
        }
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(TenderValidationError::InvalidValue(self.value));
        }
        if !is_unit_fraction(self.risk_score) {
            return Err(TenderValidationError::RiskScoreOutOfRange(self.risk_score));
        }
        if !is_unit_fraction(self.profit_prediction) {
            return Err(TenderValidationError::ProfitPredictionOutOfRange(
                self.profit_prediction,
            ));
        }
        Ok(())
    }

    /// Whole days from `today` until the deadline; negative once overdue.
    pub fn days_to_deadline(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

/// Create request for a tender.
///
/// Scores, status and submission date are derived by the service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTender {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub client: String,
    pub value: f64,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub category: Option<String>,
}

fn is_unit_fraction(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
