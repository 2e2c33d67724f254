//! Shift Processor Library
//!
//! A Rust library for ingesting production-shift CSV records from an input
//! directory into one unified, provenance-stamped dataset.
//!
//! This library provides tools for:
//! - Discovering candidate CSV files in a flat input directory
//! - Parsing each file into a polars DataFrame with isolated failure handling
//! - Validating parsed tables against the required shift-record schema
//! - Stamping valid tables with source-file and processing-timestamp columns
//! - Merging all valid tables into one combined dataset with summary statistics
//! - Structured batch reporting through a pluggable observer

pub mod config;
pub mod error;
pub mod models;
pub mod observer;
pub mod schema;

pub mod processor;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ProcessorConfig;
pub use error::{FailureKind, Result, ShiftError};
pub use models::{BatchOutcome, CombinedDataset, DatasetSummary, FileFailure, ProcessingReport};
pub use observer::{CompositeObserver, PipelineObserver, TracingObserver};
pub use processor::FileProcessor;
pub use schema::REQUIRED_COLUMNS;
