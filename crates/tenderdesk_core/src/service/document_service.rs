//! Document staging and upload for tenders.
//!
//! # Responsibility
//! - Validate staged files (name, type, size) before they touch disk.
//! - Store bytes under the upload directory and record metadata.
//!
//! # Invariants
//! - Stored names are `<tender_id>_<sanitized name>` inside `upload_dir`.
//! - An existing stored file is never overwritten.
//! - A failed metadata insert removes the file it just wrote.

use crate::model::document::{DocumentRecord, NewDocument};
use crate::model::tender::TenderId;
use crate::repo::document_repo::DocumentRepository;
use crate::repo::tender_repo::{RepoError, RepoResult};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Extensions accepted by the document drop zone.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx"];

/// Default upload cap: 16 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static UNSAFE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]").expect("valid filename regex"));

#[derive(Debug)]
pub enum DocumentError {
    /// Nothing usable remains after sanitizing the name.
    InvalidFileName(String),
    UnsupportedType(String),
    TooLarge { size_bytes: u64, max_bytes: u64 },
    TenderNotFound(TenderId),
    /// The tender already holds a document stored under this name.
    DuplicateName(String),
    Io(std::io::Error),
    Repo(RepoError),
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFileName(name) => write!(f, "invalid file name: `{name}`"),
            Self::UnsupportedType(ext) => write!(
                f,
                "unsupported document type `{ext}`; expected one of {}",
                ACCEPTED_EXTENSIONS.join("|")
            ),
            Self::TooLarge {
                size_bytes,
                max_bytes,
            } => write!(f, "document is {size_bytes} bytes; limit is {max_bytes}"),
            Self::TenderNotFound(id) => write!(f, "tender not found: {id}"),
            Self::DuplicateName(name) => write!(f, "document `{name}` already exists"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for DocumentError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TenderNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<std::io::Error> for DocumentError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Where uploads go and how large they may be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub upload_dir: PathBuf,
    pub max_bytes: u64,
}

impl UploadPolicy {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

pub struct DocumentService<R: DocumentRepository> {
    repo: R,
    policy: UploadPolicy,
}

impl<R: DocumentRepository> DocumentService<R> {
    pub fn new(repo: R, policy: UploadPolicy) -> Self {
        Self { repo, policy }
    }

    /// Validates and stores one staged file for `tender_id`.
    pub fn upload(
        &self,
        tender_id: TenderId,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<DocumentRecord, DocumentError> {
        let original_name = sanitize_filename(file_name)
            .ok_or_else(|| DocumentError::InvalidFileName(file_name.to_string()))?;
        let file_type = accepted_extension(&original_name)?;

        let size_bytes = bytes.len() as u64;
        if size_bytes > self.policy.max_bytes {
            return Err(DocumentError::TooLarge {
                size_bytes,
                max_bytes: self.policy.max_bytes,
            });
        }

        if !self.repo.tender_exists(tender_id)? {
            return Err(DocumentError::TenderNotFound(tender_id));
        }

        std::fs::create_dir_all(&self.policy.upload_dir)?;
        let stored_name = format!("{tender_id}_{original_name}");
        let stored_path = self.policy.upload_dir.join(&stored_name);
        write_new_file(&stored_path, bytes).map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => DocumentError::DuplicateName(stored_name.clone()),
            _ => DocumentError::Io(err),
        })?;

        let document = NewDocument {
            tender_id,
            stored_name,
            original_name,
            size_bytes: Some(size_bytes),
            file_type,
        };

        match self.repo.add_document(&document) {
            Ok(record) => {
                info!(
                    "event=document_upload module=service status=ok tender_id={tender_id} document_id={} size_bytes={size_bytes}",
                    record.id
                );
                Ok(record)
            }
            Err(err) => {
                if let Err(remove_err) = std::fs::remove_file(&stored_path) {
                    warn!(
                        "event=document_upload module=service status=cleanup_failed tender_id={tender_id} error={remove_err}"
                    );
                }
                Err(err.into())
            }
        }
    }

    pub fn list(&self, tender_id: TenderId) -> RepoResult<Vec<DocumentRecord>> {
        self.repo.list_documents(tender_id)
    }

    /// Deletes the stored files behind `documents`, returning how many were
    /// removed. Files already gone are skipped.
    ///
    /// Metadata rows are untouched; they go with their tender by cascade.
    pub fn remove_stored_files(&self, documents: &[DocumentRecord]) -> usize {
        let mut removed = 0;
        for document in documents {
            let path = self.policy.upload_dir.join(&document.stored_name);
            match std::fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => warn!(
                    "event=document_remove module=service status=error document_id={} error={err}",
                    document.id
                ),
            }
        }
        removed
    }
}

fn write_new_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(err) = file.write_all(bytes).and_then(|()| file.sync_all()) {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(err);
    }
    Ok(())
}

/// Reduces an uploader-supplied name to a safe single path component.
///
/// Returns `None` when nothing usable remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw.rsplit(|ch: char| ch == '/' || ch == '\\').next().unwrap_or(raw);
    let underscored = WHITESPACE_RE.replace_all(base.trim(), "_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&underscored, "");
    let trimmed = cleaned.trim_matches(|ch: char| ch == '.' || ch == '_');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn accepted_extension(file_name: &str) -> Result<String, DocumentError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(DocumentError::UnsupportedType(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::{accepted_extension, sanitize_filename, DocumentError};

    #[test]
    fn sanitize_strips_directories_and_unsafe_chars() {
        assert_eq!(
            sanitize_filename("../../etc/Tender Spec (v2).pdf").as_deref(),
            Some("Tender_Spec_v2.pdf")
        );
        assert_eq!(
            sanitize_filename(r"C:\drop\Cost Estimate.xlsx").as_deref(),
            Some("Cost_Estimate.xlsx")
        );
    }

    #[test]
    fn sanitize_rejects_names_without_content() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("..."), None);
        assert_eq!(sanitize_filename("dir/"), None);
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert_eq!(accepted_extension("Drawings.PDF").unwrap(), "pdf");
        assert!(matches!(
            accepted_extension("photo.png"),
            Err(DocumentError::UnsupportedType(ext)) if ext == "png"
        ));
        assert!(matches!(
            accepted_extension("README"),
            Err(DocumentError::UnsupportedType(ext)) if ext.is_empty()
        ));
    }
}
