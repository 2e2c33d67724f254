//! Result and report structures for batch ingestion runs.
//!
//! A batch run returns a [`BatchOutcome`]: the combined dataset (when at
//! least one file survived validation) paired with a structured
//! [`ProcessingReport`], so callers never have to re-derive pass/fail detail
//! from log output.

use chrono::NaiveDate;
use polars::frame::DataFrame;
use serde::Serialize;

use crate::error::FailureKind;

/// One rejected input file and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileFailure {
    /// File name within the input directory.
    pub file: String,
    /// Classified failure.
    pub kind: FailureKind,
}

/// Structured counts for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingReport {
    /// Candidate files discovered in the input directory.
    pub discovered: usize,
    /// Files the pipeline attempted to parse.
    pub processed: usize,
    /// Files that parsed, validated, and were merged.
    pub succeeded: usize,
    /// Files rejected at the parse or validation stage.
    pub failures: Vec<FileFailure>,
}

impl ProcessingReport {
    /// Create a report for a batch that discovered `discovered` files.
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            ..Default::default()
        }
    }

    /// Number of rejected files.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Names of the rejected files, in processing order.
    pub fn failed_files(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.file.as_str()).collect()
    }

    /// Record a rejected file.
    pub fn add_failure(&mut self, file: impl Into<String>, kind: FailureKind) {
        self.failures.push(FileFailure {
            file: file.into(),
            kind,
        });
    }

    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "Batch summary: {} discovered | {} processed | {} succeeded | {} failed{}",
            self.discovered,
            self.processed,
            self.succeeded,
            self.failed(),
            if self.failures.is_empty() {
                String::new()
            } else {
                format!(" ({})", self.failed_files().join(", "))
            }
        )
    }
}

/// Summary statistics over one combined dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Total merged rows.
    pub total_rows: usize,
    /// Earliest normalized date, when any date parsed.
    pub first_date: Option<NaiveDate>,
    /// Latest normalized date, when any date parsed.
    pub last_date: Option<NaiveDate>,
    /// Count of distinct machine identifiers.
    pub distinct_machines: usize,
    /// Sorted distinct shift labels.
    pub shifts: Vec<String>,
}

/// The merged dataset from one batch run.
#[derive(Debug, Clone)]
pub struct CombinedDataset {
    /// Row-wise union of all valid tables, provenance columns included.
    pub frame: DataFrame,
    /// Summary statistics over `frame`.
    pub summary: DatasetSummary,
}

/// Everything a batch run produces.
///
/// `dataset` is `None` when no file survived validation ("no data").
#[derive(Debug)]
pub struct BatchOutcome {
    pub dataset: Option<CombinedDataset>,
    pub report: ProcessingReport,
}

impl BatchOutcome {
    /// Whether the run produced a combined dataset.
    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }

    /// Merged row count, zero for a "no data" run.
    pub fn row_count(&self) -> usize {
        self.dataset
            .as_ref()
            .map(|d| d.summary.total_rows)
            .unwrap_or(0)
    }
}
