//! Batch command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{BatchArgs, OutputFormat};
use crate::report::{
    format_result, format_summary, load_reports, save_results, ResultsEnvelope, TriageSummary,
};

use super::analyze::build_engine;

pub fn run_batch(args: BatchArgs, level: LogLevel) -> Result<(), String> {
    let engine = build_engine(args.history.as_deref())?;

    let reports =
        load_reports(&args.input).map_err(|e| format!("Failed to read {}: {e}", args.input.display()))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Classifying {} failure report(s)", reports.len()),
    );

    let results: Vec<_> = reports
        .iter()
        .map(|r| engine.classify(&r.test_id, &r.error))
        .collect();

    let summary = TriageSummary::from_results(&results);

    match args.format {
        OutputFormat::Text => {
            for result in &results {
                log(level, LogLevel::Verbose, &format!("\n{}", format_result(result)));
            }
            println!();
            println!("{}", format_summary(&summary));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    if let Some(output) = &args.output {
        let envelope = ResultsEnvelope::new(results);
        save_results(output, &envelope)
            .map_err(|e| format!("Failed to write {}: {e}", output.display()))?;
        log(
            level,
            LogLevel::Normal,
            &format!("Results saved to {}", output.display()),
        );
    }

    Ok(())
}
