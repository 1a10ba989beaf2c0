use chrono::NaiveDate;
use tenderdesk_core::db::open_db_in_memory;
use tenderdesk_core::{
    Estimate, EstimateInput, FallbackEstimator, NewTender, RepoError, RiskEstimator, SortKey,
    SqliteTenderRepository, StatusFilter, TenderQuery, TenderService, TenderServiceError,
    TenderStatus, TenderValidationError,
};

struct DeadlinePressureEstimator;

impl RiskEstimator for DeadlinePressureEstimator {
    fn estimate(&self, input: &EstimateInput) -> Estimate {
        Estimate {
            risk_score: if input.days_to_deadline < 14 { 0.9 } else { 0.2 },
            profit_prediction: 1.5,
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 1, 1)
}

fn request(title: &str, client: &str, value: f64, deadline: NaiveDate) -> NewTender {
    NewTender {
        title: title.to_string(),
        description: String::new(),
        client: client.to_string(),
        value,
        deadline,
        category: None,
    }
}

#[test]
fn create_fills_defaults_and_fallback_scores() {
    let conn = open_db_in_memory().unwrap();
    let service = TenderService::new(SqliteTenderRepository::new(&conn), FallbackEstimator);

    let deadline = date(2024, 3, 1);
    let tender = service
        .create_tender(&request("  Bridge Survey ", "County", 50_000.0, deadline), today())
        .unwrap();

    assert_eq!(tender.title, "Bridge Survey");
    assert_eq!(tender.category, "Other");
    assert_eq!(tender.status, TenderStatus::Active);
    assert_eq!(tender.submission_date, today());
    assert_eq!(tender.risk_score, 0.3);
    assert_eq!(tender.profit_prediction, 0.15);
}

#[test]
fn create_passes_days_to_deadline_and_clamps_estimates() {
    let conn = open_db_in_memory().unwrap();
    let service = TenderService::new(SqliteTenderRepository::new(&conn), DeadlinePressureEstimator);

    let soon = date(2024, 1, 10);
    let mut req = request("Rush job", "City", 10.0, soon);
    req.category = Some("Technology".to_string());
    let tender = service.create_tender(&req, today()).unwrap();

    assert_eq!(tender.category, "Technology");
    assert_eq!(tender.risk_score, 0.9);
    assert_eq!(tender.profit_prediction, 1.0);
}

#[test]
fn create_rejects_blank_required_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = TenderService::new(SqliteTenderRepository::new(&conn), FallbackEstimator);
    let deadline = date(2024, 3, 1);

    let err = service
        .create_tender(&request(" ", "County", 1.0, deadline), today())
        .unwrap_err();
    assert!(matches!(err, TenderServiceError::MissingField("title")));

    let err = service
        .create_tender(&request("Title", "", 1.0, deadline), today())
        .unwrap_err();
    assert!(matches!(err, TenderServiceError::MissingField("client")));
}

#[test]
fn create_rejects_negative_value() {
    let conn = open_db_in_memory().unwrap();
    let service = TenderService::new(SqliteTenderRepository::new(&conn), FallbackEstimator);
    let deadline = date(2024, 3, 1);

    let err = service
        .create_tender(&request("Title", "Client", -5.0, deadline), today())
        .unwrap_err();
    assert!(matches!(
        err,
        TenderServiceError::Repo(RepoError::Validation(TenderValidationError::InvalidValue(_)))
    ));
}

#[test]
fn list_view_filters_and_sorts_persisted_tenders() {
    let conn = open_db_in_memory().unwrap();
    let service = TenderService::new(SqliteTenderRepository::new(&conn), FallbackEstimator);

    let small = service
        .create_tender(
            &request("Park benches", "Parks Dept", 20_000.0, date(2024, 5, 1)),
            today(),
        )
        .unwrap();
    let large = service
        .create_tender(
            &request("Park lighting", "Parks Dept", 90_000.0, date(2024, 4, 1)),
            today(),
        )
        .unwrap();
    let other = service
        .create_tender(
            &request("Road salt", "Highways", 5_000.0, date(2024, 2, 1)),
            today(),
        )
        .unwrap();
    service.set_status(other.id, TenderStatus::Lost).unwrap();

    let by_value = service
        .list_view(&TenderQuery::new("park", StatusFilter::All, SortKey::Value))
        .unwrap();
    let ids: Vec<i64> = by_value.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![large.id, small.id]);

    let lost = service
        .list_view(&TenderQuery::new("", StatusFilter::Only(TenderStatus::Lost), SortKey::Deadline))
        .unwrap();
    assert_eq!(lost.len(), 1);
    assert_eq!(lost[0].id, other.id);
}

#[test]
fn status_and_delete_on_missing_tender_map_to_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = TenderService::new(SqliteTenderRepository::new(&conn), FallbackEstimator);

    assert!(matches!(
        service.set_status(404, TenderStatus::Won).unwrap_err(),
        TenderServiceError::TenderNotFound(404)
    ));
    assert!(matches!(
        service.delete_tender(404).unwrap_err(),
        TenderServiceError::TenderNotFound(404)
    ));
}
