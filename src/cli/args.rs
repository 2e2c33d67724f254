//! Command-line argument definitions for the shift processor.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ProcessorConfig;

/// CLI arguments for the production-shift record processor.
///
/// Ingests a directory of shift-record CSV files, validates each against the
/// required schema, and merges the valid ones into a single dataset with
/// provenance columns and summary statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shift-processor",
    version,
    about = "Ingest production-shift CSV records into one unified dataset"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the shift processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run a batch over the input directory (main command)
    Process(ProcessArgs),
    /// Parse and validate a single file, reporting its verdict
    Check(CheckArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input directory containing shift-record CSV files
    ///
    /// Created if it does not exist. Defaults to data/input.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory containing shift-record CSV files"
    )]
    pub input_dir: Option<PathBuf>,

    /// Explicit strptime format for the date column (inferred when omitted)
    #[arg(
        long = "date-format",
        value_name = "FORMAT",
        help = "Explicit strptime format for the date column"
    )]
    pub date_format: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress output, only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// File to parse and validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Explicit strptime format for the date column (inferred when omitted)
    #[arg(
        long = "date-format",
        value_name = "FORMAT",
        help = "Explicit strptime format for the date column"
    )]
    pub date_format: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Build the processor configuration from CLI arguments.
    pub fn to_config(&self) -> ProcessorConfig {
        let mut config = ProcessorConfig::default();
        if let Some(input_dir) = &self.input_dir {
            config = config.with_input_dir(input_dir);
        }
        if let Some(format) = &self.date_format {
            config = config.with_date_format(format);
        }
        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
