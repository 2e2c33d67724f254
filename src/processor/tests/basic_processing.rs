//! Basic batch processing tests.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::config::ProcessorConfig;
use crate::error::FailureKind;
use crate::models::ProcessingReport;
use crate::observer::PipelineObserver;
use crate::processor::FileProcessor;

/// Write a schema-valid shift file with `rows` data rows.
fn write_shift_file(dir: &Path, name: &str, rows: usize) {
    let mut content = String::from("date,shift,machine,production_units,operator\n");
    for i in 0..rows {
        content.push_str(&format!(
            "2025-09-{:02},morning,M{},1{:02},alice\n",
            (i % 28) + 1,
            (i % 3) + 1,
            i % 100
        ));
    }
    fs::write(dir.join(name), content).unwrap();
}

fn processor_for(dir: &Path) -> FileProcessor {
    FileProcessor::new(ProcessorConfig::new(dir))
}

#[test]
fn test_single_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    write_shift_file(temp_dir.path(), "week_36.csv", 4);

    let outcome = processor_for(temp_dir.path()).process_all_files().unwrap();

    assert!(outcome.has_data());
    assert_eq!(outcome.row_count(), 4);
    assert_eq!(outcome.report.discovered, 1);
    assert_eq!(outcome.report.succeeded, 1);
    assert!(outcome.report.failures.is_empty());

    let dataset = outcome.dataset.unwrap();
    let names = dataset.frame.get_column_names_str();
    assert!(names.contains(&"source_file"));
    assert!(names.contains(&"processed_at"));
}

#[test]
fn test_valid_and_invalid_files_mix() {
    // a.csv is schema-valid with 10 rows; b.csv has 9 rows but no operator
    // column. Only a.csv's rows may reach the combined dataset.
    let temp_dir = TempDir::new().unwrap();
    write_shift_file(temp_dir.path(), "a.csv", 10);

    let mut b_content = String::from("date,shift,machine,production_units\n");
    for i in 0..9 {
        b_content.push_str(&format!("2025-09-{:02},night,M9,50\n", i + 1));
    }
    fs::write(temp_dir.path().join("b.csv"), b_content).unwrap();

    let outcome = processor_for(temp_dir.path()).process_all_files().unwrap();

    assert_eq!(outcome.row_count(), 10);
    assert_eq!(outcome.report.discovered, 2);
    assert_eq!(outcome.report.processed, 2);
    assert_eq!(outcome.report.succeeded, 1);
    assert_eq!(outcome.report.failed_files(), vec!["b.csv"]);

    let dataset = outcome.dataset.unwrap();
    let sources = dataset
        .frame
        .column("source_file")
        .unwrap()
        .as_materialized_series()
        .unique()
        .unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources.str().unwrap().get(0), Some("a.csv"));

    match &outcome.report.failures[0].kind {
        FailureKind::SchemaViolation { missing, .. } => {
            assert_eq!(missing, &vec!["operator".to_string()]);
        }
        other => panic!("Expected SchemaViolation, got {other:?}"),
    }
}

#[test]
fn test_combined_row_count_is_sum_of_valid_files() {
    let temp_dir = TempDir::new().unwrap();
    write_shift_file(temp_dir.path(), "one.csv", 3);
    write_shift_file(temp_dir.path(), "two.csv", 5);
    write_shift_file(temp_dir.path(), "three.csv", 2);

    let outcome = processor_for(temp_dir.path()).process_all_files().unwrap();

    assert_eq!(outcome.row_count(), 10);
    assert_eq!(outcome.report.succeeded, 3);
}

#[test]
fn test_empty_directory_returns_no_data() {
    let temp_dir = TempDir::new().unwrap();

    let outcome = processor_for(temp_dir.path()).process_all_files().unwrap();

    assert!(!outcome.has_data());
    assert_eq!(outcome.report.discovered, 0);
    assert_eq!(outcome.report.processed, 0);
}

#[test]
fn test_ensure_input_dir_then_process() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("data").join("input");

    let processor = FileProcessor::new(ProcessorConfig::new(&input_dir));
    processor.ensure_input_dir().unwrap();

    assert!(input_dir.is_dir());

    let outcome = processor.process_all_files().unwrap();
    assert!(!outcome.has_data());

    // Setup is idempotent.
    processor.ensure_input_dir().unwrap();
}

#[test]
fn test_reprocessing_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    write_shift_file(temp_dir.path(), "a.csv", 6);
    write_shift_file(temp_dir.path(), "b.csv", 4);

    let processor = processor_for(temp_dir.path());
    let first = processor.process_all_files().unwrap();
    let second = processor.process_all_files().unwrap();

    assert_eq!(first.row_count(), second.row_count());
    assert_eq!(first.report, second.report);

    let first_summary = &first.dataset.as_ref().unwrap().summary;
    let second_summary = &second.dataset.as_ref().unwrap().summary;
    assert_eq!(first_summary, second_summary);
}

#[test]
fn test_summary_statistics_over_batch() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("lines.csv"),
        "date,shift,machine,production_units,operator\n\
         2025-09-03,morning,M1,120,alice\n\
         2025-09-01,night,M2,80,bob\n\
         2025-09-05,morning,M1,110,carol\n",
    )
    .unwrap();

    let outcome = processor_for(temp_dir.path()).process_all_files().unwrap();
    let summary = outcome.dataset.unwrap().summary;

    assert_eq!(summary.total_rows, 3);
    assert_eq!(
        summary.first_date,
        chrono::NaiveDate::from_ymd_opt(2025, 9, 1)
    );
    assert_eq!(
        summary.last_date,
        chrono::NaiveDate::from_ymd_opt(2025, 9, 5)
    );
    assert_eq!(summary.distinct_machines, 2);
    assert_eq!(summary.shifts, vec!["morning", "night"]);
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl PipelineObserver for RecordingObserver {
    fn file_started(&self, file: &str) {
        self.events.lock().unwrap().push(format!("started:{file}"));
    }

    fn file_parsed(&self, file: &str, rows: usize, _invalid_dates: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("parsed:{file}:{rows}"));
    }

    fn file_failed(&self, file: &str, kind: &FailureKind) {
        self.events
            .lock()
            .unwrap()
            .push(format!("failed:{file}:{}", kind.label()));
    }

    fn batch_summary(&self, report: &ProcessingReport) {
        self.events
            .lock()
            .unwrap()
            .push(format!("summary:{}/{}", report.succeeded, report.processed));
    }
}

struct SharedObserver(Arc<RecordingObserver>);

impl PipelineObserver for SharedObserver {
    fn file_started(&self, file: &str) {
        self.0.file_started(file);
    }
    fn file_parsed(&self, file: &str, rows: usize, invalid_dates: usize) {
        self.0.file_parsed(file, rows, invalid_dates);
    }
    fn file_failed(&self, file: &str, kind: &FailureKind) {
        self.0.file_failed(file, kind);
    }
    fn batch_summary(&self, report: &ProcessingReport) {
        self.0.batch_summary(report);
    }
}

#[test]
fn test_observer_event_order_for_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    write_shift_file(temp_dir.path(), "good.csv", 2);

    let recording = Arc::new(RecordingObserver::default());
    let processor = processor_for(temp_dir.path())
        .with_observer(Box::new(SharedObserver(recording.clone())));
    processor.process_all_files().unwrap();

    let events = recording.events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            "started:good.csv".to_string(),
            "parsed:good.csv:2".to_string(),
            "summary:1/1".to_string(),
        ]
    );
}

#[test]
fn test_observer_event_order_for_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.csv"), "date,shift\n").unwrap();

    let recording = Arc::new(RecordingObserver::default());
    let processor = processor_for(temp_dir.path())
        .with_observer(Box::new(SharedObserver(recording.clone())));
    processor.process_all_files().unwrap();

    let events = recording.events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            "started:bad.csv".to_string(),
            "parsed:bad.csv:0".to_string(),
            "failed:bad.csv:empty_input".to_string(),
            "summary:0/1".to_string(),
        ]
    );
}
