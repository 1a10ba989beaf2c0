//! Tender repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `tenders` table.
//! - Keep SQL and column encoding inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Tender::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `list_tenders` orders by `created_at DESC, id DESC` (newest first).

use crate::db::DbError;
use crate::model::tender::{Tender, TenderId, TenderStatus, TenderValidationError};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TENDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    client,
    category,
    value,
    deadline,
    submission_date,
    status,
    risk_score,
    profit_prediction
FROM tenders";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for tender and document persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(TenderValidationError),
    Db(DbError),
    NotFound(TenderId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "tender not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted tender data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<TenderValidationError> for RepoError {
    fn from(value: TenderValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for tender CRUD operations.
pub trait TenderRepository {
    /// Inserts a tender; `tender.id` is ignored and the assigned id returned.
    fn create_tender(&self, tender: &Tender) -> RepoResult<TenderId>;
    fn get_tender(&self, id: TenderId) -> RepoResult<Option<Tender>>;
    /// Lists every tender, newest first.
    fn list_tenders(&self) -> RepoResult<Vec<Tender>>;
    fn update_status(&self, id: TenderId, status: TenderStatus) -> RepoResult<()>;
    /// Removes a tender and, by cascade, its document metadata.
    fn delete_tender(&self, id: TenderId) -> RepoResult<()>;
}

/// SQLite-backed tender repository.
pub struct SqliteTenderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTenderRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TenderRepository for SqliteTenderRepository<'_> {
    fn create_tender(&self, tender: &Tender) -> RepoResult<TenderId> {
        tender.validate()?;

        self.conn.execute(
            "INSERT INTO tenders (
                title,
                description,
                client,
                category,
                value,
                deadline,
                submission_date,
                status,
                risk_score,
                profit_prediction
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                tender.title.as_str(),
                tender.description.as_str(),
                tender.client.as_str(),
                tender.category.as_str(),
                tender.value,
                date_to_db(tender.deadline),
                date_to_db(tender.submission_date),
                tender.status.as_str(),
                tender.risk_score,
                tender.profit_prediction,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_tender(&self, id: TenderId) -> RepoResult<Option<Tender>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TENDER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_tender_row(row)?));
        }
        Ok(None)
    }

    fn list_tenders(&self) -> RepoResult<Vec<Tender>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TENDER_SELECT_SQL} ORDER BY created_at DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut tenders = Vec::new();
        while let Some(row) = rows.next()? {
            tenders.push(parse_tender_row(row)?);
        }
        Ok(tenders)
    }

    fn update_status(&self, id: TenderId, status: TenderStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tenders
             SET
                status = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?2;",
            params![status.as_str(), id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn delete_tender(&self, id: TenderId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tenders WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

/// Returns whether a tender row with `id` exists.
pub(crate) fn tender_exists(conn: &Connection, id: TenderId) -> RepoResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM tenders WHERE id = ?1;", [id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

fn parse_tender_row(row: &Row<'_>) -> RepoResult<Tender> {
    let status_text: String = row.get("status")?;
    let status = status_text.parse::<TenderStatus>().map_err(|_| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in tenders.status"))
    })?;

    let tender = Tender {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        client: row.get("client")?,
        category: row.get("category")?,
        value: row.get("value")?,
        deadline: parse_date_column(row, "deadline")?,
        submission_date: parse_date_column(row, "submission_date")?,
        status,
        risk_score: row.get("risk_score")?,
        profit_prediction: row.get("profit_prediction")?,
    };
    tender.validate()?;
    Ok(tender)
}

fn parse_date_column(row: &Row<'_>, column: &str) -> RepoResult<NaiveDate> {
    let text: String = row.get(column)?;
    NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid date `{text}` in tenders.{column}"))
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
