use rusqlite::Connection;
use tenderdesk_core::db::migrations::latest_version;
use tenderdesk_core::db::{open_db, open_db_in_memory, open_existing_db, DbError};

fn user_version(conn: &Connection) -> u32 {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap()
}

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name;")
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names
}

#[test]
fn fresh_database_has_tender_and_document_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    let tables = table_names(&conn);
    assert!(tables.contains(&"tenders".to_string()));
    assert!(tables.contains(&"documents".to_string()));
}

#[test]
fn reopening_a_file_keeps_rows_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tenders.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO tenders (title, client, value, deadline, submission_date, status, risk_score, profit_prediction)
         VALUES ('Depot roof', 'Transit Authority', 90000, '2024-05-01', '2024-04-01', 'active', 0.2, 0.1);",
        [],
    )
    .unwrap();
    drop(conn);

    let reopened = open_db(&path).unwrap();
    assert_eq!(user_version(&reopened), latest_version());
    let count: i64 = reopened
        .query_row("SELECT COUNT(*) FROM tenders;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn newer_schema_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    Connection::open(&path)
        .unwrap()
        .pragma_update(None, "user_version", 999)
        .unwrap();

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unopenable_path_reports_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("tenders.sqlite3");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Open { .. }));
    assert!(err.to_string().contains("tenders.sqlite3"));
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_db_in_memory().unwrap();
    let enabled: bool = conn
        .pragma_query_value(None, "foreign_keys", |row| row.get(0))
        .unwrap();
    assert!(enabled);

    let err = conn
        .execute(
            "INSERT INTO documents (tender_id, stored_name, original_name, file_type)
             VALUES (42, '42_a.pdf', 'a.pdf', 'pdf');",
            [],
        )
        .unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"));
}

#[test]
fn status_column_rejects_unknown_values() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO tenders (title, client, value, deadline, submission_date, status, risk_score, profit_prediction)
         VALUES ('t', 'c', 1.0, '2024-01-01', '2024-01-01', 'archived', 0.1, 0.1);",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn open_existing_does_not_create_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.sqlite3");

    let err = open_existing_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Open { .. }));
    assert!(!path.exists());

    drop(open_db(&path).unwrap());
    let conn = open_existing_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());
}
