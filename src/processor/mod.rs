//! Batch ingestion engine.
//!
//! Orchestrates the complete shift-record ingestion workflow using
//! specialized modules for file discovery, per-file parsing, schema
//! validation, and the final merge with summary statistics.

pub mod discovery;
pub mod merger;
pub mod parser;
pub mod validator;

#[cfg(test)]
pub mod tests;

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::ProcessorConfig;
use crate::error::{FailureKind, Result};
use crate::models::{BatchOutcome, CombinedDataset, ProcessingReport};
use crate::observer::{PipelineObserver, TracingObserver};

/// Batch processor for production-shift record files.
///
/// Each call to [`process_all_files`](Self::process_all_files) is an
/// independent, idempotent run over the current directory contents; no state
/// carries between calls.
pub struct FileProcessor {
    config: ProcessorConfig,
    observer: Box<dyn PipelineObserver>,
}

impl FileProcessor {
    /// Create a processor with the given configuration.
    ///
    /// Construction has no side effects; call
    /// [`ensure_input_dir`](Self::ensure_input_dir) once before the first
    /// run if the input directory may not exist yet.
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            observer: Box::new(TracingObserver),
        }
    }

    /// Replace the default tracing observer.
    pub fn with_observer(mut self, observer: Box<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The configuration this processor runs with.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Create the input directory if it does not exist yet.
    ///
    /// Idempotent one-time setup step for the owning caller.
    pub fn ensure_input_dir(&self) -> Result<()> {
        if !self.config.input_dir.exists() {
            std::fs::create_dir_all(&self.config.input_dir)?;
            info!("Created input directory: {}", self.config.input_dir.display());
        }
        Ok(())
    }

    /// Run one batch over the current contents of the input directory.
    ///
    /// Files are processed sequentially in listing order. Parse and
    /// validation failures are recorded per file and never stop the batch;
    /// only directory-level failures abort the run. Returns the combined
    /// dataset (or `None` when no file survived) together with the
    /// structured processing report.
    pub fn process_all_files(&self) -> Result<BatchOutcome> {
        info!(
            "Searching for .{} files in: {}",
            self.config.extension,
            self.config.input_dir.display()
        );

        let files =
            discovery::discover_input_files(&self.config.input_dir, &self.config.extension)?;

        let mut report = ProcessingReport::new(files.len());
        if files.is_empty() {
            info!(
                "No .{} files to process; copy input files into {}",
                self.config.extension,
                self.config.input_dir.display()
            );
            self.observer.batch_summary(&report);
            return Ok(BatchOutcome {
                dataset: None,
                report,
            });
        }

        let mut collected = Vec::new();
        for path in &files {
            let file_name = display_name(path);
            self.observer.file_started(&file_name);
            report.processed += 1;

            match self.process_single_file(path) {
                Ok(frame) => {
                    collected.push(frame);
                    report.succeeded += 1;
                }
                Err(kind) => {
                    self.observer.file_failed(&file_name, &kind);
                    report.add_failure(file_name, kind);
                }
            }
        }

        self.observer.batch_summary(&report);

        if collected.is_empty() {
            return Ok(BatchOutcome {
                dataset: None,
                report,
            });
        }

        debug!("Combining {} validated tables", collected.len());
        let frame = merger::combine(collected)?;
        let summary = merger::summarize(&frame)?;
        info!(
            "Batch complete: {} rows, {} machines, shifts {:?}",
            summary.total_rows, summary.distinct_machines, summary.shifts
        );

        Ok(BatchOutcome {
            dataset: Some(CombinedDataset { frame, summary }),
            report,
        })
    }

    /// Parse, validate, and stamp one file.
    ///
    /// Every failure comes back as a contained [`FailureKind`], including
    /// faults while stamping provenance.
    fn process_single_file(
        &self,
        path: &Path,
    ) -> std::result::Result<polars::frame::DataFrame, FailureKind> {
        let file_name = display_name(path);

        let parsed = parser::read_csv_file(path, &self.config)?;
        self.observer
            .file_parsed(&file_name, parsed.frame.height(), parsed.invalid_dates);

        validator::validate(&parsed.frame)?;

        merger::stamp_provenance(parsed.frame, &file_name, Utc::now().naive_utc()).map_err(|e| {
            FailureKind::UnexpectedFailure {
                class: "Polars".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

/// File name component for reports and events.
fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
