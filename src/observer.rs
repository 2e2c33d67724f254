//! Pipeline event observer.
//!
//! Progress and diagnostic reporting is decoupled from the ingestion logic:
//! the pipeline notifies an observer through discrete events, and observers
//! decide the output medium. This keeps the pipeline testable without
//! capturing text output.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::FailureKind;
use crate::models::ProcessingReport;

/// Observer interface for batch ingestion events.
///
/// All methods default to no-ops, so implementors override only the events
/// they care about.
pub trait PipelineObserver: Send + Sync {
    /// A file is about to be parsed.
    fn file_started(&self, _file: &str) {}

    /// A file parsed successfully; `invalid_dates` counts date values that
    /// could not be normalized and were marked missing.
    fn file_parsed(&self, _file: &str, _rows: usize, _invalid_dates: usize) {}

    /// A file was rejected at the parse or validation stage.
    fn file_failed(&self, _file: &str, _kind: &FailureKind) {}

    /// The batch loop finished; counts and failed files are final.
    fn batch_summary(&self, _report: &ProcessingReport) {}
}

/// Emits every event through the `tracing` log layer.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn file_started(&self, file: &str) {
        debug!("Processing file: {}", file);
    }

    fn file_parsed(&self, file: &str, rows: usize, invalid_dates: usize) {
        info!("Parsed {}: {} rows", file, rows);
        if invalid_dates > 0 {
            warn!("{}: {} date values could not be parsed and were marked missing", file, invalid_dates);
        }
    }

    fn file_failed(&self, file: &str, kind: &FailureKind) {
        warn!("Rejected {}: {}", file, kind);
    }

    fn batch_summary(&self, report: &ProcessingReport) {
        info!("{}", report.summary());
    }
}

/// Fans events out to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl PipelineObserver for CompositeObserver {
    fn file_started(&self, file: &str) {
        for o in &self.observers {
            o.file_started(file);
        }
    }

    fn file_parsed(&self, file: &str, rows: usize, invalid_dates: usize) {
        for o in &self.observers {
            o.file_parsed(file, rows, invalid_dates);
        }
    }

    fn file_failed(&self, file: &str, kind: &FailureKind) {
        for o in &self.observers {
            o.file_failed(file, kind);
        }
    }

    fn batch_summary(&self, report: &ProcessingReport) {
        for o in &self.observers {
            o.batch_summary(report);
        }
    }
}
