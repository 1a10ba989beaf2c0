//! Canned tender list shown when live data is unavailable.

use crate::model::tender::{Tender, TenderStatus};
use chrono::NaiveDate;

struct FixtureRow {
    id: i64,
    title: &'static str,
    description: &'static str,
    client: &'static str,
    category: &'static str,
    value: f64,
    deadline: (i32, u32, u32),
    submission_date: (i32, u32, u32),
    status: TenderStatus,
    risk_score: f64,
    profit_prediction: f64,
}

const FIXTURES: &[FixtureRow] = &[
    FixtureRow {
        id: 1,
        title: "Highway Construction Project Phase 2",
        description: "Construction of 25km highway section with bridges and interchanges",
        client: "Department of Transportation",
        category: "Construction",
        value: 4_500_000.0,
        deadline: (2024, 2, 15),
        submission_date: (2024, 1, 10),
        status: TenderStatus::Active,
        risk_score: 0.3,
        profit_prediction: 0.18,
    },
    FixtureRow {
        id: 2,
        title: "Smart City IoT Infrastructure",
        description: "Implementation of IoT sensors and smart traffic management system",
        client: "City Council",
        category: "Technology",
        value: 1_200_000.0,
        deadline: (2024, 1, 30),
        submission_date: (2023, 12, 15),
        status: TenderStatus::Won,
        risk_score: 0.2,
        profit_prediction: 0.22,
    },
    FixtureRow {
        id: 3,
        title: "Hospital Equipment Procurement",
        description: "Supply and installation of medical equipment for new wing",
        client: "Regional Health Authority",
        category: "Healthcare",
        value: 890_000.0,
        deadline: (2024, 3, 1),
        submission_date: (2024, 1, 20),
        status: TenderStatus::Pending,
        risk_score: 0.4,
        profit_prediction: 0.15,
    },
    FixtureRow {
        id: 4,
        title: "Office Building Renovation",
        description: "Complete renovation of 10-story office building including HVAC",
        client: "Property Management Corp",
        category: "Construction",
        value: 2_800_000.0,
        deadline: (2024, 2, 20),
        submission_date: (2024, 1, 5),
        status: TenderStatus::Active,
        risk_score: 0.25,
        profit_prediction: 0.20,
    },
    FixtureRow {
        id: 5,
        title: "Water Treatment Plant Upgrade",
        description: "Modernization of water treatment facilities and equipment",
        client: "Municipal Water Authority",
        category: "Infrastructure",
        value: 3_200_000.0,
        deadline: (2024, 1, 25),
        submission_date: (2023, 12, 20),
        status: TenderStatus::Lost,
        risk_score: 0.5,
        profit_prediction: 0.12,
    },
];

/// Returns the five fallback tenders (ids 1 to 5) in display order.
pub fn fallback_tenders() -> Vec<Tender> {
    FIXTURES.iter().filter_map(to_tender).collect()
}

fn to_tender(row: &FixtureRow) -> Option<Tender> {
    Some(Tender {
        id: row.id,
        title: row.title.to_string(),
        description: row.description.to_string(),
        client: row.client.to_string(),
        category: row.category.to_string(),
        value: row.value,
        deadline: date(row.deadline)?,
        submission_date: date(row.submission_date)?,
        status: row.status,
        risk_score: row.risk_score,
        profit_prediction: row.profit_prediction,
    })
}

fn date((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
