//! Per-file CSV parsing.
//!
//! Reads one delimited file into a polars `DataFrame` using the fixed
//! dialect (comma-separated UTF-8 with a header row, leading whitespace
//! after the delimiter stripped) and normalizes the `date` column when
//! present. Every failure is classified into a [`FailureKind`] and contained
//! at this boundary so one corrupt input never aborts the batch.

use std::path::Path;

use polars::prelude::*;

use crate::config::ProcessorConfig;
use crate::error::FailureKind;
use crate::schema::DATE_COLUMN;

/// A successfully parsed input file.
#[derive(Debug)]
pub struct ParsedFile {
    /// Parsed table, headers trimmed and dates normalized.
    pub frame: DataFrame,
    /// Date values that could not be normalized and were marked missing.
    pub invalid_dates: usize,
}

/// Parse one input file into a [`ParsedFile`].
///
/// Never panics and never returns a batch-level error: any fault is mapped
/// to a [`FailureKind`] for the caller to record and skip.
pub fn read_csv_file(
    path: &Path,
    config: &ProcessorConfig,
) -> std::result::Result<ParsedFile, FailureKind> {
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FailureKind::FileNotFound,
        _ => FailureKind::UnexpectedFailure {
            class: "Io".to_string(),
            message: e.to_string(),
        },
    })?;
    if !metadata.is_file() {
        return Err(FailureKind::FileNotFound);
    }
    if metadata.len() == 0 {
        return Err(FailureKind::EmptyInput);
    }

    let mut frame = CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|opts| opts.with_separator(b','))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(classify_polars_error)?
        .finish()
        .map_err(classify_polars_error)?;

    trim_header_names(&mut frame).map_err(classify_polars_error)?;
    let frame = strip_leading_whitespace(frame).map_err(classify_polars_error)?;
    let (frame, invalid_dates) =
        normalize_dates(frame, config.date_format.as_deref()).map_err(classify_polars_error)?;

    Ok(ParsedFile {
        frame,
        invalid_dates,
    })
}

/// Map a polars fault onto the per-file failure taxonomy.
fn classify_polars_error(error: PolarsError) -> FailureKind {
    match error {
        PolarsError::NoData(_) => FailureKind::EmptyInput,
        PolarsError::ComputeError(msg)
        | PolarsError::SchemaMismatch(msg)
        | PolarsError::ShapeMismatch(msg) => FailureKind::MalformedInput {
            diagnostic: msg.to_string(),
        },
        other => FailureKind::UnexpectedFailure {
            class: error_class(&other).to_string(),
            message: other.to_string(),
        },
    }
}

/// Stable class name for diagnostics on unexpected faults.
fn error_class(error: &PolarsError) -> &'static str {
    match error {
        PolarsError::ColumnNotFound(_) => "ColumnNotFound",
        PolarsError::Duplicate(_) => "Duplicate",
        PolarsError::InvalidOperation(_) => "InvalidOperation",
        PolarsError::IO { .. } => "Io",
        PolarsError::OutOfBounds(_) => "OutOfBounds",
        _ => "Polars",
    }
}

/// Strip leading whitespace left on header names by the `", "` habit.
fn trim_header_names(frame: &mut DataFrame) -> PolarsResult<()> {
    let renames: Vec<(String, String)> = frame
        .get_column_names_str()
        .iter()
        .filter(|name| name.starts_with(|c: char| c.is_whitespace()))
        .map(|name| (name.to_string(), name.trim_start().to_string()))
        .collect();

    for (old, new) in renames {
        frame.rename(&old, new.into())?;
    }
    Ok(())
}

/// Strip leading whitespace from every string cell.
fn strip_leading_whitespace(frame: DataFrame) -> PolarsResult<DataFrame> {
    let exprs: Vec<Expr> = frame
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| {
            col(column.name().clone())
                .str()
                .strip_chars_start(lit(NULL))
        })
        .collect();

    if exprs.is_empty() {
        return Ok(frame);
    }

    frame.lazy().with_columns(exprs).collect()
}

/// Normalize the `date` column to the `Date` type when present.
///
/// Unparseable values become null rather than failing the file; the count of
/// values nulled this way is returned alongside the frame. When no value
/// parses at all (format inference fails), the whole column degrades to
/// null `Date`.
fn normalize_dates(
    frame: DataFrame,
    format: Option<&str>,
) -> PolarsResult<(DataFrame, usize)> {
    if !frame.get_column_names_str().contains(&DATE_COLUMN) {
        return Ok((frame, 0));
    }

    let dtype = frame.column(DATE_COLUMN)?.dtype().clone();
    if matches!(dtype, DataType::Date | DataType::Datetime(_, _)) {
        return Ok((frame, 0));
    }

    let height = frame.height();
    let nulls_before = frame
        .column(DATE_COLUMN)?
        .as_materialized_series()
        .null_count();

    let options = StrptimeOptions {
        format: format.map(Into::into),
        strict: false,
        ..Default::default()
    };

    match frame
        .clone()
        .lazy()
        .with_column(
            col(DATE_COLUMN)
                .cast(DataType::String)
                .str()
                .to_date(options),
        )
        .collect()
    {
        Ok(parsed) => {
            let nulls_after = parsed
                .column(DATE_COLUMN)?
                .as_materialized_series()
                .null_count();
            Ok((parsed, nulls_after.saturating_sub(nulls_before)))
        }
        Err(_) => {
            let mut degraded = frame;
            degraded.replace(
                DATE_COLUMN,
                Series::full_null(DATE_COLUMN.into(), height, &DataType::Date),
            )?;
            Ok((degraded, height - nulls_before))
        }
    }
}
