//! Document metadata repository.
//!
//! # Invariants
//! - Documents always reference an existing tender.
//! - Listing order is `uploaded_at ASC, id ASC`.

use crate::model::document::{DocumentRecord, NewDocument};
use crate::model::tender::TenderId;
use crate::repo::tender_repo::{tender_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for tender document metadata.
pub trait DocumentRepository {
    /// Records an uploaded document; `NotFound` when the tender is missing.
    fn add_document(&self, document: &NewDocument) -> RepoResult<DocumentRecord>;
    fn list_documents(&self, tender_id: TenderId) -> RepoResult<Vec<DocumentRecord>>;
    fn tender_exists(&self, tender_id: TenderId) -> RepoResult<bool>;
}

/// SQLite-backed document repository.
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn add_document(&self, document: &NewDocument) -> RepoResult<DocumentRecord> {
        if !tender_exists(self.conn, document.tender_id)? {
            return Err(RepoError::NotFound(document.tender_id));
        }

        let size_bytes = document
            .size_bytes
            .map(i64::try_from)
            .transpose()
            .map_err(|_| RepoError::InvalidData("document size exceeds i64".to_string()))?;

        self.conn.execute(
            "INSERT INTO documents (
                tender_id,
                stored_name,
                original_name,
                size_bytes,
                file_type
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                document.tender_id,
                document.stored_name.as_str(),
                document.original_name.as_str(),
                size_bytes,
                document.file_type.as_str(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        let record = self.conn.query_row(
            "SELECT id, tender_id, stored_name, original_name, size_bytes, file_type, uploaded_at
             FROM documents
             WHERE id = ?1;",
            [id],
            |row| Ok(parse_document_row(row)),
        )??;
        Ok(record)
    }

    fn list_documents(&self, tender_id: TenderId) -> RepoResult<Vec<DocumentRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, tender_id, stored_name, original_name, size_bytes, file_type, uploaded_at
             FROM documents
             WHERE tender_id = ?1
             ORDER BY uploaded_at ASC, id ASC;",
        )?;
        let mut rows = stmt.query([tender_id])?;
        let mut documents = Vec::new();
        while let Some(row) = rows.next()? {
            documents.push(parse_document_row(row)?);
        }
        Ok(documents)
    }

    fn tender_exists(&self, tender_id: TenderId) -> RepoResult<bool> {
        tender_exists(self.conn, tender_id)
    }
}

fn parse_document_row(row: &Row<'_>) -> RepoResult<DocumentRecord> {
    let size_bytes = match row.get::<_, Option<i64>>("size_bytes")? {
        Some(value) => Some(u64::try_from(value).map_err(|_| {
            RepoError::InvalidData(format!("negative size `{value}` in documents.size_bytes"))
        })?),
        None => None,
    };

    Ok(DocumentRecord {
        id: row.get("id")?,
        tender_id: row.get("tender_id")?,
        stored_name: row.get("stored_name")?,
        original_name: row.get("original_name")?,
        size_bytes,
        file_type: row.get("file_type")?,
        uploaded_at: row.get("uploaded_at")?,
    })
}
