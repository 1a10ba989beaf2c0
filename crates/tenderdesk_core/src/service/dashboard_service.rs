//! Dashboard and analytics aggregates.
//!
//! Pure reductions over a tender list. Chart collaborators consume the
//! resulting series as-is.

use crate::model::tender::{Tender, TenderStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Headline metrics for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tenders: usize,
    pub active_tenders: usize,
    pub won_tenders: usize,
    /// Sum of values of won tenders.
    pub total_value: f64,
    /// Won / total as a percentage, one decimal.
    pub win_rate: f64,
    /// Mean profit prediction as a percentage, one decimal.
    pub avg_profit_margin: f64,
}

impl DashboardStats {
    pub fn from_tenders(tenders: &[Tender]) -> Self {
        let total_tenders = tenders.len();
        let active_tenders = count_status(tenders, TenderStatus::Active);
        let won_tenders = count_status(tenders, TenderStatus::Won);
        let total_value = tenders
            .iter()
            .filter(|tender| tender.status == TenderStatus::Won)
            .map(|tender| tender.value)
            .sum();

        let (win_rate, avg_profit_margin) = if total_tenders == 0 {
            (0.0, 0.0)
        } else {
            let total = total_tenders as f64;
            let profit_sum: f64 = tenders.iter().map(|t| t.profit_prediction).sum();
            (
                round_one_decimal(won_tenders as f64 / total * 100.0),
                round_one_decimal(profit_sum / total * 100.0),
            )
        };

        Self {
            total_tenders,
            active_tenders,
            won_tenders,
            total_value,
            win_rate,
            avg_profit_margin,
        }
    }
}

/// Count and value per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub total_value: f64,
}

/// Groups tenders by category, sorted by category name.
pub fn category_breakdown(tenders: &[Tender]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for tender in tenders {
        let entry = groups.entry(tender.category.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += tender.value;
    }

    groups
        .into_iter()
        .map(|(category, (count, total_value))| CategorySummary {
            category: category.to_string(),
            count,
            total_value,
        })
        .collect()
}

/// Tender count for each status, in `TenderStatus::ALL` order.
///
/// Every status is present, including those with zero tenders.
pub fn status_breakdown(tenders: &[Tender]) -> Vec<(TenderStatus, usize)> {
    TenderStatus::ALL
        .iter()
        .map(|status| (*status, count_status(tenders, *status)))
        .collect()
}

fn count_status(tenders: &[Tender], status: TenderStatus) -> usize {
    tenders.iter().filter(|tender| tender.status == status).count()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{category_breakdown, status_breakdown, DashboardStats};
    use crate::model::tender::TenderStatus;
    use crate::source::fixtures::fallback_tenders;

    #[test]
    fn stats_over_fallback_list() {
        let stats = DashboardStats::from_tenders(&fallback_tenders());
        assert_eq!(stats.total_tenders, 5);
        assert_eq!(stats.active_tenders, 2);
        assert_eq!(stats.won_tenders, 1);
        assert_eq!(stats.total_value, 1_200_000.0);
        assert_eq!(stats.win_rate, 20.0);
        // (0.18 + 0.22 + 0.15 + 0.20 + 0.12) / 5 = 0.174
        assert_eq!(stats.avg_profit_margin, 17.4);
    }

    #[test]
    fn stats_for_empty_list_are_zero() {
        let stats = DashboardStats::from_tenders(&[]);
        assert_eq!(stats.total_tenders, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.avg_profit_margin, 0.0);
    }

    #[test]
    fn categories_are_grouped_and_sorted() {
        let summary = category_breakdown(&fallback_tenders());
        let names: Vec<&str> = summary.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(
            names,
            vec!["Construction", "Healthcare", "Infrastructure", "Technology"]
        );
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[0].total_value, 7_300_000.0);
    }

    #[test]
    fn status_breakdown_includes_every_status() {
        let counts = status_breakdown(&[]);
        assert_eq!(counts.len(), 4);
        assert!(counts.iter().all(|(_, count)| *count == 0));

        let counts = status_breakdown(&fallback_tenders());
        assert_eq!(counts[0], (TenderStatus::Active, 2));
    }
}
