//! Résumé document schema and normalization module
//!
//! This module defines the canonical résumé shape, the lenient normalizer
//! that back-fills partial or legacy documents, and the JSON file boundary
//! used for import and export.

pub(crate) mod io;
pub mod models;
pub mod normalize;
pub mod query;

// Re-export the schema, the normalizer, and query functions
pub use models::*;
pub use normalize::normalize;
pub use query::*;

pub use io::{ImportError, read_resume_file, to_export_json, validate_resume_file, write_resume_file};
