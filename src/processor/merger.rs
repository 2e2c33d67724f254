//! Provenance stamping, batch merge, and summary statistics.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use polars::prelude::*;

use crate::models::DatasetSummary;
use crate::schema::{DATE_COLUMN, MACHINE_COLUMN, PROCESSED_AT_COLUMN, SHIFT_COLUMN, SOURCE_FILE_COLUMN};

/// Append the provenance columns to a validated table.
///
/// Appends `source_file` and `processed_at`; existing columns are left
/// untouched.
pub fn stamp_provenance(
    frame: DataFrame,
    source_file: &str,
    processed_at: NaiveDateTime,
) -> PolarsResult<DataFrame> {
    frame
        .lazy()
        .with_columns([
            lit(source_file.to_string()).alias(SOURCE_FILE_COLUMN),
            lit(processed_at).alias(PROCESSED_AT_COLUMN),
        ])
        .collect()
}

/// Concatenate all collected tables row-wise into the combined dataset.
///
/// Tables with identical schemas produce a uniform combined shape; columns
/// present in only some tables are null-filled in the rest. Input order is
/// preserved and rows are renumbered contiguously from zero.
pub fn combine(frames: Vec<DataFrame>) -> PolarsResult<DataFrame> {
    if frames.len() == 1 {
        return Ok(frames.into_iter().next().unwrap());
    }

    let lazy_frames: Vec<LazyFrame> = frames.into_iter().map(|frame| frame.lazy()).collect();
    concat(
        lazy_frames,
        UnionArgs {
            diagonal: true,
            // mixed numeric dtypes across files coerce to a common supertype
            to_supertypes: true,
            ..Default::default()
        },
    )?
    .collect()
}

/// Compute summary statistics over the combined dataset.
pub fn summarize(frame: &DataFrame) -> PolarsResult<DatasetSummary> {
    let (first_date, last_date) = date_range(frame)?;

    let distinct_machines = frame
        .column(MACHINE_COLUMN)?
        .as_materialized_series()
        .n_unique()?;

    let shift_values = frame
        .column(SHIFT_COLUMN)?
        .as_materialized_series()
        .cast(&DataType::String)?
        .unique()?;
    let mut shifts: Vec<String> = shift_values
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();
    shifts.sort();

    Ok(DatasetSummary {
        total_rows: frame.height(),
        first_date,
        last_date,
        distinct_machines,
        shifts,
    })
}

/// Min/max of the normalized date column, `None` when nothing parsed.
fn date_range(frame: &DataFrame) -> PolarsResult<(Option<NaiveDate>, Option<NaiveDate>)> {
    let column = frame.column(DATE_COLUMN)?.as_materialized_series();
    if column.dtype() != &DataType::Date {
        return Ok((None, None));
    }

    let dates = column.date()?;
    Ok((
        dates.min().map(date_from_days),
        dates.max().map(date_from_days),
    ))
}

/// Convert a polars `Date` physical value (days since epoch) to chrono.
fn date_from_days(days: i32) -> NaiveDate {
    NaiveDate::default() + Duration::days(i64::from(days))
}
