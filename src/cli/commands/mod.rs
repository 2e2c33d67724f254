//! Command implementations for the shift processor CLI.
//!
//! Each command lives in its own module; `shared` holds the tracing setup
//! and the console observer both commands use.

pub mod check;
pub mod process;
pub mod shared;

use crate::cli::args::{Args, Commands};

/// Dispatch to the appropriate subcommand handler.
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
