//! Shared triage types: test categories and classification results.

use serde::{Deserialize, Serialize};

use super::history::TestRecord;
use super::patterns::SignatureName;
use super::severity::Severity;

/// Closed set of test categories known to the triage engine.
///
/// Free-text category strings from history tables are folded into this set;
/// anything unrecognized becomes [`Category::Unknown`], which is a normal
/// case rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Functional,
    Api,
    Compliance,
    Authentication,
    Payment,
    #[default]
    Unknown,
}

impl Category {
    /// Parse a category from a free-text string (infallible, case-insensitive).
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "functional" => Self::Functional,
            "api" => Self::Api,
            "compliance" => Self::Compliance,
            "authentication" => Self::Authentication,
            "payment" => Self::Payment,
            _ => Self::Unknown,
        }
    }

    /// Canonical display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::Api => "API",
            Self::Compliance => "Compliance",
            Self::Authentication => "Authentication",
            Self::Payment => "Payment",
            Self::Unknown => "Unknown",
        }
    }

    /// High-impact categories carry a HIGH severity floor during resolution.
    pub fn is_high_impact(self) -> bool {
        matches!(self, Self::Api | Self::Authentication | Self::Payment)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The value produced by one classification pass.
///
/// Transient by design: the core defines the shape, encoding and persistence
/// belong to external collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Identifier of the failing test (e.g. file + test name)
    pub test_id: String,

    /// Raw error message that was classified
    pub error_text: String,

    /// Name of the matched failure signature
    pub signature: SignatureName,

    /// Final severity after multi-factor resolution
    pub severity: Severity,

    /// Historical context for the test, reliability score included
    pub context: TestRecord,

    /// Remediation steps from the matched signature
    pub remediations: Vec<String>,

    /// Deterministic confidence in [0, 1], derived from keyword hit count
    pub confidence: f64,
}
