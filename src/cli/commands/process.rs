//! The process command: run one batch over the input directory.

use std::sync::Arc;

use anyhow::Context;
use colored::*;

use crate::cli::args::ProcessArgs;
use crate::cli::commands::shared::{self, ProgressObserver};
use crate::models::BatchOutcome;
use crate::observer::{CompositeObserver, PipelineObserver, TracingObserver};
use crate::processor::FileProcessor;

/// Run a batch and print a summary of the outcome.
pub fn run_process(args: ProcessArgs) -> anyhow::Result<()> {
    shared::init_tracing(args.get_log_level());

    let config = args.to_config();
    println!(
        "{} {}",
        "Ingesting shift records from:".bright_cyan(),
        config.input_dir.display()
    );

    let mut processor = FileProcessor::new(config);
    if args.show_progress() {
        let observers: Vec<Arc<dyn PipelineObserver>> =
            vec![Arc::new(TracingObserver), Arc::new(ProgressObserver::new())];
        processor = processor.with_observer(Box::new(CompositeObserver::new(observers)));
    }

    processor
        .ensure_input_dir()
        .context("failed to prepare input directory")?;

    let outcome = processor
        .process_all_files()
        .context("batch run aborted")?;

    print_summary(&outcome);
    Ok(())
}

fn print_summary(outcome: &BatchOutcome) {
    let report = &outcome.report;

    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Files discovered:".bright_cyan(),
        report.discovered.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files succeeded:".bright_cyan(),
        report.succeeded.to_string().bright_white()
    );
    if report.failed() > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            report.failed().to_string().bright_red().bold()
        );
        for failure in &report.failures {
            println!("    {} {}", failure.file.bright_red(), failure.kind);
        }
    }

    match &outcome.dataset {
        Some(dataset) => {
            let summary = &dataset.summary;
            println!(
                "  {} {}",
                "Total records:".bright_cyan(),
                summary.total_rows.to_string().bright_white().bold()
            );
            if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
                println!("  {} {} - {}", "Date range:".bright_cyan(), first, last);
            }
            println!(
                "  {} {}",
                "Distinct machines:".bright_cyan(),
                summary.distinct_machines.to_string().bright_white()
            );
            println!(
                "  {} {}",
                "Shifts:".bright_cyan(),
                summary.shifts.join(", ").bright_white()
            );
        }
        None => {
            println!("  {}", "No data produced from this run".yellow());
        }
    }
}
