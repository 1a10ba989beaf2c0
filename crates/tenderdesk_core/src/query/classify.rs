//! Risk bands and status presentation tags.
//!
//! Band boundaries are inclusive on the upper edge: 0.3 is `Low`,
//! 0.6 is `Medium`.

use serde::Serialize;

const LOW_RISK_MAX: f64 = 0.3;
const MEDIUM_RISK_MAX: f64 = 0.6;

/// Risk band derived from a tender's risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn tag(self) -> StatusTag {
        match self {
            Self::Low => StatusTag::Success,
            Self::Medium => StatusTag::Warning,
            Self::High => StatusTag::Danger,
        }
    }
}

/// Presentation tag consumed by rendering collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    Success,
    Info,
    Warning,
    Danger,
    /// Fallback for anything unrecognized.
    Neutral,
}

impl StatusTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}

/// Classifies a risk score into its band.
pub fn risk_level(score: f64) -> RiskLevel {
    if score <= LOW_RISK_MAX {
        RiskLevel::Low
    } else if score <= MEDIUM_RISK_MAX {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Maps a raw status name to its tag; unknown names map to `Neutral`.
pub fn status_tag(raw: &str) -> StatusTag {
    match raw.parse::<crate::model::tender::TenderStatus>() {
        Ok(status) => status.tag(),
        Err(_) => StatusTag::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::{risk_level, status_tag, RiskLevel, StatusTag};

    #[test]
    fn risk_band_boundaries() {
        assert_eq!(risk_level(0.0), RiskLevel::Low);
        assert_eq!(risk_level(0.3), RiskLevel::Low);
        assert_eq!(risk_level(0.31), RiskLevel::Medium);
        assert_eq!(risk_level(0.6), RiskLevel::Medium);
        assert_eq!(risk_level(0.61), RiskLevel::High);
        assert_eq!(risk_level(1.0), RiskLevel::High);
    }

    #[test]
    fn labels_match_bands() {
        assert_eq!(risk_level(0.25).label(), "Low");
        assert_eq!(risk_level(0.5).label(), "Medium");
        assert_eq!(risk_level(0.9).label(), "High");
    }

    #[test]
    fn status_tags_cover_known_and_unknown() {
        assert_eq!(status_tag("won"), StatusTag::Success);
        assert_eq!(status_tag("active"), StatusTag::Info);
        assert_eq!(status_tag("pending"), StatusTag::Warning);
        assert_eq!(status_tag("lost"), StatusTag::Danger);
        assert_eq!(status_tag("archived"), StatusTag::Neutral);
        assert_eq!(status_tag(""), StatusTag::Neutral);
    }

    #[test]
    fn tags_serialize_as_their_display_names() {
        assert_eq!(
            serde_json::to_value(RiskLevel::Medium).unwrap(),
            serde_json::json!("Medium")
        );
        assert_eq!(
            serde_json::to_value(StatusTag::Danger).unwrap(),
            serde_json::json!(StatusTag::Danger.as_str())
        );
    }
}
