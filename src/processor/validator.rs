//! Schema validation for parsed tables.

use polars::frame::DataFrame;

use crate::error::FailureKind;
use crate::schema::missing_columns;

/// Decide whether a parsed table may be merged.
///
/// Checks run in order and short-circuit at the first failure:
/// an empty table is rejected, then any missing required column is rejected
/// with the exact missing set and the columns actually present. The table
/// itself is never modified.
pub fn validate(frame: &DataFrame) -> std::result::Result<(), FailureKind> {
    if frame.height() == 0 {
        return Err(FailureKind::EmptyInput);
    }

    let present = frame.get_column_names_str();
    let missing = missing_columns(&present);
    if !missing.is_empty() {
        return Err(FailureKind::SchemaViolation {
            missing,
            present: present.iter().map(|name| name.to_string()).collect(),
        });
    }

    Ok(())
}
