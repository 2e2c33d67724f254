//! Error handling for shift-record ingestion.
//!
//! Two tiers: `ShiftError` aborts a whole batch run (directory-level
//! problems), while `FailureKind` classifies per-file failures that are
//! recorded and skipped without stopping the batch.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied for input directory: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, ShiftError>;

/// Per-file failure classification.
///
/// Every variant is fully contained at the parse/validate boundary: the file
/// is recorded in the batch report and skipped, and processing continues
/// with the next file.
#[derive(Error, Debug, Clone, PartialEq, serde::Serialize)]
pub enum FailureKind {
    #[error("file not found")]
    FileNotFound,

    #[error("no parseable rows or columns")]
    EmptyInput,

    #[error("malformed delimited input: {diagnostic}")]
    MalformedInput { diagnostic: String },

    #[error("missing required columns {missing:?}; columns present: {present:?}")]
    SchemaViolation {
        missing: Vec<String>,
        present: Vec<String>,
    },

    #[error("unexpected {class} failure: {message}")]
    UnexpectedFailure { class: String, message: String },
}

impl FailureKind {
    /// Short stable label for report output.
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::FileNotFound => "file_not_found",
            FailureKind::EmptyInput => "empty_input",
            FailureKind::MalformedInput { .. } => "malformed_input",
            FailureKind::SchemaViolation { .. } => "schema_violation",
            FailureKind::UnexpectedFailure { .. } => "unexpected_failure",
        }
    }
}
