//! Result shape for the LLM-backed analysis path.

use serde::{Deserialize, Serialize};

use crate::triage::Severity;

/// Structured root cause analysis produced by the model-backed path.
///
/// Similar to, but not contractually identical with, the deterministic
/// [`ClassificationResult`](crate::triage::ClassificationResult). Fields the
/// model omits deserialize to defaults so a partial answer still parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootCauseAnalysis {
    /// Name of the failed test
    #[serde(default)]
    pub test_name: String,

    /// Error message that was analyzed
    #[serde(default)]
    pub error_message: String,

    /// Likely root causes, most likely first
    #[serde(default)]
    pub root_causes: Vec<String>,

    /// Severity as judged by the model (defaults to MEDIUM)
    #[serde(default)]
    pub severity: Severity,

    /// Code areas or modules likely affected
    #[serde(default)]
    pub affected_areas: Vec<String>,

    /// Step-by-step debugging suggestions
    #[serde(default)]
    pub recommended_actions: Vec<String>,

    /// References to similar past issues, if any
    #[serde(default)]
    pub similar_issues: Option<Vec<String>>,

    /// Model confidence in [0, 1]
    #[serde(default)]
    pub confidence_score: f64,
}

impl RootCauseAnalysis {
    /// Fallback when the analysis service is unavailable.
    pub fn unavailable(test_name: &str, error_message: &str) -> Self {
        Self {
            test_name: test_name.to_string(),
            error_message: error_message.to_string(),
            root_causes: vec!["Analysis service unavailable".to_string()],
            severity: Severity::Medium,
            affected_areas: Vec::new(),
            recommended_actions: vec![
                "Check the error manually".to_string(),
                "Review recent changes".to_string(),
            ],
            similar_issues: None,
            confidence_score: 0.0,
        }
    }

    /// Fallback when the model answered but the response could not be parsed.
    pub fn unparseable(test_name: &str, error_message: &str) -> Self {
        Self {
            test_name: test_name.to_string(),
            error_message: error_message.to_string(),
            root_causes: vec!["Unable to parse model response".to_string()],
            severity: Severity::Medium,
            affected_areas: Vec::new(),
            recommended_actions: vec!["Review the error message manually".to_string()],
            similar_issues: None,
            confidence_score: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{"root_causes": ["selector drift"], "severity": "HIGH"}"#;
        let analysis: RootCauseAnalysis = serde_json::from_str(json).unwrap();

        assert_eq!(analysis.root_causes, vec!["selector drift"]);
        assert_eq!(analysis.severity, Severity::High);
        assert!(analysis.test_name.is_empty());
        assert!(analysis.similar_issues.is_none());
        assert_eq!(analysis.confidence_score, 0.0);
    }

    #[test]
    fn test_fallback_confidence_levels() {
        let down = RootCauseAnalysis::unavailable("t", "e");
        assert_eq!(down.confidence_score, 0.0);
        assert_eq!(down.severity, Severity::Medium);

        let garbled = RootCauseAnalysis::unparseable("t", "e");
        assert_eq!(garbled.confidence_score, 0.3);
    }
}
