//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep CLI callers decoupled from storage details.

pub mod dashboard_service;
pub mod document_service;
pub mod estimator;
pub mod tender_service;
