//! Failure triage core.
//!
//! Three independent, stateless components compose in a fixed pipeline:
//! the [`PatternLibrary`] matches error text against known failure
//! signatures, the [`HistoryStore`] supplies per-test reliability context,
//! and [`resolve_severity`] fuses both into a final severity label.
//! [`TriageEngine`] wires the pipeline together.

mod history;
mod patterns;
mod severity;
mod types;


pub use history::{HistoryStore, TestRecord, TestStats, FLAKINESS_THRESHOLD};
pub use patterns::{PatternLibrary, Signature, SignatureMatch, SignatureName};
pub use severity::{resolve_severity, Severity, CRITICAL_KEYWORDS, HIGH_KEYWORDS};
pub use types::{Category, ClassificationResult};

/// Confidence assigned when no signature matched.
const UNKNOWN_CONFIDENCE: f64 = 0.3;

/// The deterministic classification pipeline.
///
/// Holds the immutable signature library and history store. Classification
/// is a pure function of its inputs and these tables, so one engine may be
/// shared by any number of concurrent call sites.
#[derive(Debug, Clone, Default)]
pub struct TriageEngine {
    library: PatternLibrary,
    history: HistoryStore,
}

impl TriageEngine {
    /// Engine over the built-in history seed table.
    pub fn new() -> Self {
        Self {
            library: PatternLibrary::new(),
            history: HistoryStore::builtin(),
        }
    }

    /// Engine over an explicit history table, e.g. one loaded from a file.
    pub fn with_history(history: HistoryStore) -> Self {
        Self {
            library: PatternLibrary::new(),
            history,
        }
    }

    /// Run one classification pass: match, analyze, resolve.
    pub fn classify(&self, test_id: &str, error_text: &str) -> ClassificationResult {
        let matched = self.library.match_error(error_text);
        let context = self.history.analyze(test_id);
        let severity =
            resolve_severity(error_text, context.category, matched.signature.base_severity);

        ClassificationResult {
            test_id: test_id.to_string(),
            error_text: error_text.to_string(),
            signature: matched.signature.name,
            severity,
            remediations: matched
                .signature
                .remediations
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            confidence: confidence(&matched),
            context,
        }
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}

/// Deterministic confidence derived from the keyword hit count, capped below
/// certainty. An UNKNOWN match gets a fixed low confidence.
fn confidence(matched: &SignatureMatch) -> f64 {
    if matched.signature.name == SignatureName::Unknown {
        UNKNOWN_CONFIDENCE
    } else {
        #[allow(clippy::cast_precision_loss)]
        let hits = matched.keyword_hits as f64;
        (0.5 + 0.15 * hits).min(0.95)
    }
}
