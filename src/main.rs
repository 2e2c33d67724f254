use clap::Parser;
use shift_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Shift Processor - Production-Shift Record Ingestion");
    println!("===================================================");
    println!();
    println!("Ingest a directory of production-shift CSV records, validate each file");
    println!("against the required schema, and merge the valid ones into a unified,");
    println!("provenance-stamped dataset with summary statistics.");
    println!();
    println!("USAGE:");
    println!("    shift-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Run a batch over the input directory (main command)");
    println!("    check       Parse and validate a single file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Process the default input directory (data/input):");
    println!("    shift-processor process");
    println!();
    println!("    # Process a specific directory with verbose logging:");
    println!("    shift-processor process --input /path/to/records -v");
    println!();
    println!("    # Check a single file before dropping it into the input directory:");
    println!("    shift-processor check week_36.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    shift-processor <COMMAND> --help");
}
