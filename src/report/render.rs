//! Plain-text rendering of triage values.

use crate::triage::{ClassificationResult, PatternLibrary, Severity, TestRecord};

use super::summary::TriageSummary;

/// Triage action item for a severity level.
fn action_line(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "URGENT - fix immediately, blocking",
        Severity::High => "HIGH - fix before the next release",
        Severity::Medium => "MEDIUM - plan a fix in the next sprint",
        Severity::Low => "LOW - nice to fix when time permits",
    }
}

/// Format one classification result for terminal output.
pub fn format_result(result: &ClassificationResult) -> String {
    let mut lines = vec![
        format!("Test: {}", result.test_id),
        format!("Error: {}", result.error_text),
        format!("Signature: {}", result.signature),
        format!("Severity: {} ({})", result.severity, action_line(result.severity)),
        format!("Confidence: {:.0}%", result.confidence * 100.0),
    ];

    lines.push(String::new());
    lines.push(format_context(&result.context));

    lines.push(String::new());
    lines.push("Remediations:".to_string());
    for (i, step) in result.remediations.iter().enumerate() {
        lines.push(format!("  {}. {step}", i + 1));
    }

    lines.join("\n")
}

/// Format a test's historical context.
pub fn format_context(record: &TestRecord) -> String {
    let mut lines = vec![
        format!("Category: {}", record.category),
        format!("Module: {}", record.module),
        format!("Reliability: {:.1}%", record.reliability_score),
        format!("Flakiness: {:.0}%", record.flakiness * 100.0),
    ];
    if record.avg_duration_ms > 0 {
        lines.push(format!("Avg duration: {}ms", record.avg_duration_ms));
    }
    lines.join("\n")
}

/// Format the signature catalog.
pub fn format_catalog(library: &PatternLibrary) -> String {
    let mut lines = Vec::new();
    for signature in library.all() {
        lines.push(format!(
            "{} [{}]",
            signature.name, signature.base_severity
        ));
        lines.push(format!("  keywords: {}", signature.keywords.join(", ")));
    }
    lines.join("\n")
}

/// Format a batch summary.
pub fn format_summary(summary: &TriageSummary) -> String {
    let mut lines = vec![format!("Failures analyzed: {}", summary.total)];

    lines.push(String::new());
    lines.push("By severity:".to_string());
    for (severity, count) in &summary.by_severity {
        lines.push(format!("  {severity}: {count}"));
    }

    lines.push(String::new());
    lines.push("By signature:".to_string());
    for (name, pct) in summary.signature_percentages() {
        lines.push(format!("  {name}: {pct:.0}%"));
    }

    lines.join("\n")
}
