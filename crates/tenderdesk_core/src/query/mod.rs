//! In-memory tender views.
//!
//! # Responsibility
//! - Filter and order tender lists for display.
//! - Derive risk bands, status tags and formatted values for renderers.
//!
//! # Invariants
//! - Nothing in this module touches storage or mutates a tender.

pub mod classify;
pub mod engine;
pub mod format;
