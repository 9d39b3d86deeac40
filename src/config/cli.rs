//! CLI argument structs for the clasificar binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Clasificar: deterministic test-failure triage
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "clasificar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Classifies test failures by signature, history context, and resolved severity"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Classify a single test failure
    Analyze(AnalyzeArgs),

    /// Classify a batch of failure reports from a JSON file
    Batch(BatchArgs),

    /// Show the failure signature catalog
    Patterns(PatternsArgs),

    /// Show historical context for a test
    Context(ContextArgs),
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AnalyzeArgs {
    /// Identifier of the failing test (e.g. crypto.results.spec.ts)
    #[arg(value_name = "TEST_ID")]
    pub test_id: String,

    /// Error message to classify
    #[arg(value_name = "ERROR")]
    pub error: String,

    /// Replace the built-in history table with one loaded from a JSON file
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the batch command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct BatchArgs {
    /// Path to a JSON array of failure reports
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Replace the built-in history table with one loaded from a JSON file
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Write classified results to this file as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the patterns command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PatternsArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the context command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ContextArgs {
    /// Identifier of the test to look up
    #[arg(value_name = "TEST_ID")]
    pub test_id: String,

    /// Replace the built-in history table with one loaded from a JSON file
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
