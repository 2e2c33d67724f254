//! Required-column schema for production-shift records.
//!
//! The schema is a process-wide constant: a table is eligible for merging
//! only when every required column is present under its exact name.

/// Columns every shift-record file must contain (case-sensitive).
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "shift", "machine", "production_units", "operator"];

/// Optional column that receives date normalization when present.
pub const DATE_COLUMN: &str = "date";

/// Column holding the distinct machine identifiers summarized per batch.
pub const MACHINE_COLUMN: &str = "machine";

/// Column holding the shift labels summarized per batch.
pub const SHIFT_COLUMN: &str = "shift";

/// Provenance column: originating file name.
pub const SOURCE_FILE_COLUMN: &str = "source_file";

/// Provenance column: processing timestamp.
pub const PROCESSED_AT_COLUMN: &str = "processed_at";

/// Required columns absent from `present`, in schema order.
pub fn missing_columns(present: &[&str]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !present.contains(required))
        .map(|required| required.to_string())
        .collect()
}
