//! Shared CLI plumbing: tracing setup and the console progress observer.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;

use crate::error::FailureKind;
use crate::models::ProcessingReport;
use crate::observer::PipelineObserver;

/// Initialize the tracing subscriber at the requested level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(level: &str) {
    let max_level = match level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        _ => Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .try_init();
}

/// Drives an indicatif spinner from pipeline events.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")
                .unwrap(),
        );
        Self { bar }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineObserver for ProgressObserver {
    fn file_started(&self, file: &str) {
        self.bar.set_message(format!("Processing: {file}"));
        self.bar.inc(1);
    }

    fn file_failed(&self, file: &str, _kind: &FailureKind) {
        self.bar.set_message(format!("Rejected: {file}"));
    }

    fn batch_summary(&self, _report: &ProcessingReport) {
        self.bar.finish_and_clear();
    }
}
