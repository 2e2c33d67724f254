//! The check command: parse and validate a single file.

use anyhow::bail;
use colored::*;

use crate::cli::args::CheckArgs;
use crate::cli::commands::shared;
use crate::config::ProcessorConfig;
use crate::processor::{parser, validator};

/// Parse one file, validate it against the required schema, and report the
/// verdict. Fails with a nonzero exit code when the file would be rejected
/// by a batch run.
pub fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    shared::init_tracing(args.get_log_level());

    let mut config = ProcessorConfig::default();
    if let Some(format) = &args.date_format {
        config = config.with_date_format(format);
    }

    println!(
        "{} {}",
        "Checking file:".bright_cyan(),
        args.file.display()
    );

    let parsed = match parser::read_csv_file(&args.file, &config) {
        Ok(parsed) => parsed,
        Err(kind) => {
            println!("{} {}", "REJECTED:".bright_red().bold(), kind);
            bail!("{} failed to parse", args.file.display());
        }
    };

    println!(
        "  {} {} rows, {} columns",
        "Parsed:".bright_green(),
        parsed.frame.height(),
        parsed.frame.width()
    );
    if parsed.invalid_dates > 0 {
        println!(
            "  {} {} date values could not be parsed",
            "Warning:".yellow(),
            parsed.invalid_dates
        );
    }

    match validator::validate(&parsed.frame) {
        Ok(()) => {
            println!("{}", "VALID: file is eligible for merging".bright_green().bold());
            Ok(())
        }
        Err(kind) => {
            println!("{} {}", "REJECTED:".bright_red().bold(), kind);
            bail!("{} failed validation", args.file.display());
        }
    }
}
