//! Context command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{ContextArgs, OutputFormat};
use crate::report::format_context;

use super::analyze::build_engine;

pub fn run_context(args: ContextArgs, level: LogLevel) -> Result<(), String> {
    let engine = build_engine(args.history.as_deref())?;
    let record = engine.history().analyze(&args.test_id);

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, &format!("Test: {}", args.test_id));
            println!("{}", format_context(&record));

            let fixes = engine.history().suggest_stability_fixes(&args.test_id);
            if !fixes.is_empty() {
                println!();
                println!("Test shows signs of flakiness. Consider:");
                for (i, fix) in fixes.iter().enumerate() {
                    println!("  {}. {fix}", i + 1);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&record)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
