//! Configuration for the ingestion pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input directory when none is configured.
pub const DEFAULT_INPUT_DIR: &str = "data/input";

/// Default file extension for candidate input files.
pub const DEFAULT_EXTENSION: &str = "csv";

/// Configuration for a [`FileProcessor`](crate::FileProcessor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Directory scanned for candidate input files.
    pub input_dir: PathBuf,

    /// Extension candidate files must carry (without the dot, case-sensitive).
    pub extension: String,

    /// Explicit strptime format for the `date` column. When unset the format
    /// is inferred from the data.
    pub date_format: Option<String>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            date_format: None,
        }
    }
}

impl ProcessorConfig {
    /// Create a configuration for the given input directory.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Default::default()
        }
    }

    /// Set the input directory.
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    /// Set the candidate file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set an explicit strptime format for date normalization.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }
}
