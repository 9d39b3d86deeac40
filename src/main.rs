//! Clasificar CLI
//!
//! Deterministic triage entry point for the clasificar library.
//!
//! # Usage
//!
//! ```bash
//! # Classify a single failure
//! clasificar analyze crypto.results.spec.ts "Timeout waiting for element '.crypto-tab'"
//!
//! # Classify a batch of failure reports from JSON
//! clasificar batch failures.json --output results.json
//!
//! # Show the signature catalog
//! clasificar patterns
//!
//! # Show historical context for a test
//! clasificar context crypto.results.spec.ts
//! ```

use clap::Parser;
use clasificar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
