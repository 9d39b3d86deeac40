//! CLI command implementations

mod analyze;
mod batch;
mod context;
mod patterns;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Analyze(args) => analyze::run_analyze(args, log_level),
        Command::Batch(args) => batch::run_batch(args, log_level),
        Command::Patterns(args) => patterns::run_patterns(args, log_level),
        Command::Context(args) => context::run_context(args, log_level),
    }
}
