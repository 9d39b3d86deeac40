//! Severity labels and multi-factor severity resolution.
//!
//! The resolver fuses three signals in a fixed order: the matched signature's
//! base severity, keyword overrides found directly in the error text, and the
//! failing test's category. Textual evidence of a crash always wins over
//! category heuristics, and category escalation never applies to text that
//! already signals CRITICAL.

use serde::{Deserialize, Serialize};

use super::types::Category;

/// Triage severity label.
///
/// Variants are declared in ascending priority so `Ord` matches the numeric
/// score used by the resolver.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Nice to fix when time permits
    Low,

    /// Plan a fix in the next sprint
    #[default]
    Medium,

    /// Fix before the next release
    High,

    /// Blocking, fix immediately
    Critical,
}

impl Severity {
    /// Numeric score used by the resolver (CRITICAL=4 down to LOW=1).
    pub fn score(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Map a numeric score back to a label. Unmapped scores fall back to
    /// MEDIUM rather than failing.
    pub fn from_score(score: u8) -> Self {
        match score {
            4 => Self::Critical,
            3 => Self::High,
            1 => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Parse a severity label from a string (infallible, defaults to MEDIUM
    /// for unrecognized input).
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Canonical uppercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keywords that force CRITICAL regardless of the signature's base severity.
pub const CRITICAL_KEYWORDS: &[&str] = &["500", "crash", "broken", "not working", "permission denied"];

/// Keywords that floor the running score at HIGH.
pub const HIGH_KEYWORDS: &[&str] = &["timeout", "assertion", "failed", "error"];

/// Resolve the final severity for a failure.
///
/// Resolution order: critical-keyword override, then high-keyword floor, then
/// high-impact category floor. Apart from the initial override each step can
/// only raise the running score, never lower it.
pub fn resolve_severity(error_text: &str, category: Category, pattern_severity: Severity) -> Severity {
    let mut score = pattern_severity.score();
    let lower = error_text.to_lowercase();

    if CRITICAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        // Override, not a floor: textual crash evidence wins outright.
        score = 4;
    } else if HIGH_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        score = score.max(3);
    }

    if category.is_high_impact() && score < 3 {
        score = 3;
    }

    Severity::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_round_trip() {
        for sev in [Severity::Low, Severity::Medium, Severity::High, Severity::Critical] {
            assert_eq!(Severity::from_score(sev.score()), sev);
        }
    }

    #[test]
    fn test_from_score_unmapped_defaults_to_medium() {
        assert_eq!(Severity::from_score(0), Severity::Medium);
        assert_eq!(Severity::from_score(9), Severity::Medium);
    }

    #[test]
    fn test_parse_defaults_to_medium() {
        assert_eq!(Severity::parse("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::parse("high"), Severity::High);
        assert_eq!(Severity::parse("garbage"), Severity::Medium);
        assert_eq!(Severity::parse(""), Severity::Medium);
    }

    #[test]
    fn test_ordering_matches_scores() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_critical_override_beats_low_base() {
        let sev = resolve_severity("Internal Server Error 500", Category::Functional, Severity::Low);
        assert_eq!(sev, Severity::Critical);
    }

    #[test]
    fn test_high_keyword_floors_at_high() {
        let sev = resolve_severity("request failed unexpectedly", Category::Functional, Severity::Low);
        assert_eq!(sev, Severity::High);
    }

    #[test]
    fn test_high_keyword_does_not_lower_critical_base() {
        let sev = resolve_severity("operation timeout", Category::Functional, Severity::Critical);
        assert_eq!(sev, Severity::Critical);
    }

    #[test]
    fn test_category_floor_raises_low_base() {
        let sev = resolve_severity("something odd happened", Category::Payment, Severity::Low);
        assert_eq!(sev, Severity::High);
    }

    #[test]
    fn test_no_category_floor_for_functional() {
        let sev = resolve_severity("something odd happened", Category::Functional, Severity::Low);
        assert_eq!(sev, Severity::Medium);
    }

    #[test]
    fn test_plain_text_keeps_base_severity() {
        // "failure" does not contain the keyword "failed", so no floor applies
        let sev = resolve_severity("plain failure", Category::Functional, Severity::Low);
        assert_eq!(sev, Severity::Low);
    }

    #[test]
    fn test_serde_uppercase_labels() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
        let parsed: Severity = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(parsed, Severity::Low);
    }
}
