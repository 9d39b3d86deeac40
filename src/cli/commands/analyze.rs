//! Analyze command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_history, AnalyzeArgs, OutputFormat};
use crate::report::format_result;
use crate::triage::TriageEngine;

/// Build an engine over the built-in table or one loaded from --history.
pub(super) fn build_engine(history: Option<&std::path::Path>) -> Result<TriageEngine, String> {
    match history {
        Some(path) => {
            let store = load_history(path).map_err(|e| format!("History error: {e}"))?;
            Ok(TriageEngine::with_history(store))
        }
        None => Ok(TriageEngine::new()),
    }
}

pub fn run_analyze(args: AnalyzeArgs, level: LogLevel) -> Result<(), String> {
    let engine = build_engine(args.history.as_deref())?;

    log(
        level,
        LogLevel::Verbose,
        &format!("Classifying failure for {}", args.test_id),
    );

    let result = engine.classify(&args.test_id, &args.error);

    match args.format {
        OutputFormat::Text => {
            println!("{}", format_result(&result));

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
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
