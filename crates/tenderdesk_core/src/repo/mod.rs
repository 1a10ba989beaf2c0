//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Tender writes enforce `Tender::validate()` before persistence.
//! - APIs return semantic errors (`NotFound`) in addition to DB errors.

pub mod document_repo;
pub mod tender_repo;
