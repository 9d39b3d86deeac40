//! Reporting collaborator: batch input, result persistence, aggregation,
//! and plain-text rendering.
//!
//! The triage core defines the shapes; this module owns their encoding.

mod render;
mod summary;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::triage::ClassificationResult;

pub use render::{format_catalog, format_context, format_result, format_summary};
pub use summary::TriageSummary;

/// Result type for report file operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors at the file and encoding boundary. Classification itself never
/// fails; only reading and writing reports can.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One failure report as supplied by the caller (e.g. a runner export).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Identifier of the failing test
    pub test_id: String,

    /// Error message to classify
    pub error: String,

    /// Optional free-text details, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Optional free-text context, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Envelope written when persisting a batch of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsEnvelope {
    /// When the batch was classified
    pub generated_at: DateTime<Utc>,

    pub results: Vec<ClassificationResult>,
}

impl ResultsEnvelope {
    pub fn new(results: Vec<ClassificationResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
        }
    }
}

/// Load a JSON array of failure reports from a file.
pub fn load_reports(path: &Path) -> Result<Vec<FailureReport>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Persist a results envelope as pretty-printed JSON.
pub fn save_results(path: &Path, envelope: &ResultsEnvelope) -> Result<()> {
    let json = serde_json::to_string_pretty(envelope)?;
    fs::write(path, json)?;
    Ok(())
}
