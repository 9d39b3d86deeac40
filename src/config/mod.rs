//! Configuration: CLI argument definitions and history-table loading.

mod cli;
mod history_file;

pub use cli::{
    parse_args, AnalyzeArgs, BatchArgs, Cli, Command, ContextArgs, OutputFormat, PatternsArgs,
};
pub use history_file::{load_history, ConfigError};
