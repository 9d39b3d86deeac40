//! Aggregation over a batch of classification results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::triage::{ClassificationResult, Severity, SignatureName};

/// Per-severity and per-signature breakdown of a triage batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageSummary {
    /// Severity counts, sorted by count descending
    pub by_severity: Vec<(Severity, u32)>,

    /// Signature counts, sorted by count descending
    pub by_signature: Vec<(SignatureName, u32)>,

    /// Total results aggregated
    pub total: u32,
}

impl TriageSummary {
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let mut severities: HashMap<Severity, u32> = HashMap::new();
        let mut signatures: HashMap<SignatureName, u32> = HashMap::new();

        for result in results {
            *severities.entry(result.severity).or_insert(0) += 1;
            *signatures.entry(result.signature).or_insert(0) += 1;
        }

        let mut by_severity: Vec<(Severity, u32)> = severities.into_iter().collect();
        // Secondary key keeps ordering stable when counts tie
        by_severity.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        let mut by_signature: Vec<(SignatureName, u32)> = signatures.into_iter().collect();
        by_signature.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.as_str().cmp(b.0.as_str())));

        Self {
            by_severity,
            by_signature,
            total: u32::try_from(results.len()).unwrap_or(u32::MAX),
        }
    }

    /// Count of results at one severity.
    pub fn severity_count(&self, severity: Severity) -> u32 {
        self.by_severity
            .iter()
            .find(|(s, _)| *s == severity)
            .map_or(0, |(_, n)| *n)
    }

    /// Signature shares as percentages, sorted descending.
    pub fn signature_percentages(&self) -> Vec<(SignatureName, f64)> {
        if self.total == 0 {
            return Vec::new();
        }

        let total = f64::from(self.total);
        self.by_signature
            .iter()
            .map(|(name, count)| (*name, f64::from(*count) / total * 100.0))
            .collect()
    }
}
