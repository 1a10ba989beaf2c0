//! Tender document metadata model.
//!
//! File bytes live in the upload directory; only metadata is persisted.

use crate::model::tender::TenderId;
use serde::{Deserialize, Serialize};

/// Storage-assigned document identifier.
pub type DocumentId = i64;

/// Persisted metadata for one uploaded tender document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub tender_id: TenderId,
    /// File name inside the upload directory.
    pub stored_name: String,
    /// Sanitized name as supplied by the uploader.
    pub original_name: String,
    /// `None` when the size could not be determined.
    pub size_bytes: Option<u64>,
    /// Lowercase extension without the leading dot.
    pub file_type: String,
    /// Unix epoch milliseconds.
    pub uploaded_at: i64,
}

/// Insert request for document metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub tender_id: TenderId,
    pub stored_name: String,
    pub original_name: String,
    pub size_bytes: Option<u64>,
    pub file_type: String,
}
