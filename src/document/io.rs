//! File I/O operations and validation
//!
//! This module is the import/export file boundary. Parse failures are
//! surfaced as typed errors so the CLI can tell the user the file was
//! invalid while leaving the stored document untouched.

use anyhow::{Result, bail};
use std::path::Path;
use thiserror::Error;

use super::models::Resume;
use super::normalize::normalize;

/// Why an import file could not be turned into a résumé
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Validates that the file looks like a résumé export
pub fn validate_resume_file(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "json" {
        bail!(
            "Invalid file format. Expected .json file, got .{}\n\
            Note: cvflex imports the .json files produced by `cvflex export --format json`",
            extension
        );
    }

    Ok(())
}

/// Read and normalize a résumé export file.
///
/// Any well-formed JSON is accepted, however partial or stale its shape;
/// missing fields are back-filled by [`normalize`]. Only unreadable files
/// and malformed JSON are errors.
pub async fn read_resume_file(file_path: &Path) -> Result<Resume, ImportError> {
    let path = file_path.display().to_string();

    let text = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|source| ImportError::Io {
            path: path.clone(),
            source,
        })?;

    let value = serde_json::from_str(&text).map_err(|source| ImportError::Parse { path, source })?;

    Ok(normalize(value))
}

/// Serialize the résumé as pretty-printed JSON, the round-trip-safe export
/// format: re-importing the result is a no-op against the current state.
pub fn to_export_json(resume: &Resume) -> Result<String> {
    Ok(serde_json::to_string_pretty(resume)?)
}

/// Write a résumé export file
pub async fn write_resume_file(resume: &Resume, file_path: &Path) -> Result<()> {
    let json = to_export_json(resume)?;
    tokio::fs::write(file_path, json).await?;
    Ok(())
}
