//! Domain model for tenders and their documents.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every tender is identified by a storage-assigned `TenderId`.
//! - Records are validated before persistence and after read-back.

pub mod document;
pub mod tender;
