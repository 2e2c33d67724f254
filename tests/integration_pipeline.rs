//! End-to-end tests for the ingestion pipeline through the public API.

use std::fs;

use tempfile::TempDir;

use shift_processor::{FailureKind, FileProcessor, ProcessorConfig, ShiftError};

#[test]
fn test_full_pipeline_mixed_inputs() {
    let temp_dir = TempDir::new().unwrap();

    fs::write(
        temp_dir.path().join("week_36.csv"),
        "date,shift,machine,production_units,operator\n\
         2025-09-01,morning,M1,120,alice\n\
         2025-09-01,night,M2,80,bob\n\
         2025-09-02,morning,M1,130,alice\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("week_37.csv"),
        "date,shift,machine,production_units,operator\n\
         2025-09-08,morning,M3,70,carol\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("broken.csv"),
        "date,shift,machine\n2025-09-01,morning,M1\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("ignored.txt"), "not a record file").unwrap();

    let processor = FileProcessor::new(ProcessorConfig::new(temp_dir.path()));
    let outcome = processor.process_all_files().unwrap();

    assert_eq!(outcome.report.discovered, 3);
    assert_eq!(outcome.report.succeeded, 2);
    assert_eq!(outcome.report.failed_files(), vec!["broken.csv"]);
    assert_eq!(outcome.row_count(), 4);

    let dataset = outcome.dataset.unwrap();
    assert_eq!(dataset.summary.distinct_machines, 3);
    assert_eq!(dataset.summary.shifts, vec!["morning", "night"]);
    assert_eq!(
        dataset.summary.first_date,
        chrono::NaiveDate::from_ymd_opt(2025, 9, 1)
    );
    assert_eq!(
        dataset.summary.last_date,
        chrono::NaiveDate::from_ymd_opt(2025, 9, 8)
    );

    // Every row carries its originating file name.
    let sources = dataset
        .frame
        .column("source_file")
        .unwrap()
        .as_materialized_series()
        .unique()
        .unwrap();
    assert_eq!(sources.len(), 2);
}

#[test]
fn test_missing_columns_reported_with_detail() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("partial.csv"),
        "date,machine\n2025-09-01,M1\n",
    )
    .unwrap();

    let processor = FileProcessor::new(ProcessorConfig::new(temp_dir.path()));
    let outcome = processor.process_all_files().unwrap();

    assert!(!outcome.has_data());
    match &outcome.report.failures[0].kind {
        FailureKind::SchemaViolation { missing, present } => {
            assert_eq!(
                missing,
                &vec![
                    "shift".to_string(),
                    "production_units".to_string(),
                    "operator".to_string()
                ]
            );
            assert_eq!(present, &vec!["date".to_string(), "machine".to_string()]);
        }
        other => panic!("Expected SchemaViolation, got {other:?}"),
    }
}

#[test]
fn test_directory_level_failure_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let processor = FileProcessor::new(ProcessorConfig::new(&missing));

    assert!(matches!(
        processor.process_all_files().unwrap_err(),
        ShiftError::DirectoryNotFound { .. }
    ));
}

#[test]
fn test_auto_created_directory_yields_no_data() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("data").join("input");

    let processor = FileProcessor::new(ProcessorConfig::new(&input_dir));
    processor.ensure_input_dir().unwrap();
    let outcome = processor.process_all_files().unwrap();

    assert!(!outcome.has_data());
    assert_eq!(outcome.report.discovered, 0);
}
