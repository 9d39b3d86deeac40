//! Patterns command implementation

use serde::Serialize;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, PatternsArgs};
use crate::report::format_catalog;
use crate::triage::{PatternLibrary, Severity, SignatureName};

/// Serializable view of one catalog entry.
#[derive(Debug, Serialize)]
struct CatalogEntry {
    name: SignatureName,
    keywords: Vec<&'static str>,
    base_severity: Severity,
    remediations: Vec<&'static str>,
}

pub fn run_patterns(args: PatternsArgs, level: LogLevel) -> Result<(), String> {
    let library = PatternLibrary::new();

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Failure signature catalog:");
            println!("{}", format_catalog(&library));
        }
        OutputFormat::Json => {
            let entries: Vec<CatalogEntry> = library
                .all()
                .iter()
                .map(|s| CatalogEntry {
                    name: s.name,
                    keywords: s.keywords.to_vec(),
                    base_severity: s.base_severity,
                    remediations: s.remediations.to_vec(),
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
