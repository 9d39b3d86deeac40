//! Signature library and keyword matcher.
//!
//! Matching is plain lowercase substring containment, not word-boundary
//! aware: a keyword inside a longer word still counts. This is intentional
//! for compatibility with existing classifications; see DESIGN.md.

use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Closed set of failure signature names.
///
/// Declaration order is load-bearing: the matcher breaks score ties in favor
/// of the earlier signature, which privileges infrastructural categories
/// (timeouts, API errors) over generic ones (assertion mismatches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignatureName {
    TimeoutSelector,
    AssertionMismatch,
    #[serde(rename = "API_500")]
    Api500,
    ApiValidation,
    AsyncPromise,
    NullReference,
    Navigation,
    Permission,
    Flakiness,
    /// Reserved fallback when no signature scores above zero
    Unknown,
}

impl SignatureName {
    /// Canonical uppercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TimeoutSelector => "TIMEOUT_SELECTOR",
            Self::AssertionMismatch => "ASSERTION_MISMATCH",
            Self::Api500 => "API_500",
            Self::ApiValidation => "API_VALIDATION",
            Self::AsyncPromise => "ASYNC_PROMISE",
            Self::NullReference => "NULL_REFERENCE",
            Self::Navigation => "NAVIGATION",
            Self::Permission => "PERMISSION",
            Self::Flakiness => "FLAKINESS",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for SignatureName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named failure category: keyword triggers, base severity, and ordered
/// remediation steps.
///
/// Immutable configuration defined at process start; every signature except
/// the UNKNOWN fallback has a non-empty keyword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: SignatureName,
    pub keywords: &'static [&'static str],
    pub base_severity: Severity,
    pub remediations: &'static [&'static str],
}

/// Signature table in declaration (tie-break) order.
const SIGNATURES: &[Signature] = &[
    Signature {
        name: SignatureName::TimeoutSelector,
        keywords: &["timeout", "selector", "element", "wait"],
        base_severity: Severity::High,
        remediations: &[
            "Increase the runner timeout to 90s or more",
            "Wait for network idle before interacting with the page",
            "Verify the selector exists in DevTools before the test runs",
            "Check whether the element lives in an iframe or shadow DOM",
            "Add an explicit wait on the locator before asserting",
        ],
    },
    Signature {
        name: SignatureName::AssertionMismatch,
        keywords: &["assertion", "expected", "actual", "equal", "match"],
        base_severity: Severity::Medium,
        remediations: &[
            "Log actual vs expected values at the assertion site",
            "Check for data type mismatches (string vs number)",
            "Verify test data setup and initialization",
            "Use strict equality to catch precision differences",
            "Check for whitespace or formatting differences",
        ],
    },
    Signature {
        name: SignatureName::Api500,
        keywords: &["500", "internal server error", "backend"],
        base_severity: Severity::Critical,
        remediations: &[
            "Check server logs for exception traces",
            "Verify the database is accessible and not overloaded",
            "Review the endpoint code for null dereferences",
            "Check for timeouts in downstream services",
            "Verify the expected test data exists in the database",
        ],
    },
    Signature {
        name: SignatureName::ApiValidation,
        keywords: &["response", "validation", "schema", "parse"],
        base_severity: Severity::Medium,
        remediations: &[
            "Verify the response structure matches the schema",
            "Check for null or missing fields in the response",
            "Validate JSON parsing against malformed payloads",
            "Review the API contract documentation",
            "Re-run the test against a captured real response",
        ],
    },
    Signature {
        name: SignatureName::AsyncPromise,
        keywords: &["async", "promise", "await", "callback", "async operation"],
        base_severity: Severity::High,
        remediations: &[
            "Ensure every async operation is awaited",
            "Check for unhandled promise rejections",
            "Join parallel operations explicitly before asserting",
            "Add error handling around async boundaries",
            "Review event listener cleanup",
        ],
    },
    Signature {
        name: SignatureName::NullReference,
        keywords: &["cannot read property", "null", "undefined", "no property"],
        base_severity: Severity::Medium,
        remediations: &[
            "Add null/undefined checks before property access",
            "Use optional chaining where available",
            "Log the object structure before accessing properties",
            "Check that the DOM element exists before manipulation",
            "Verify data initialization before use",
        ],
    },
    Signature {
        name: SignatureName::Navigation,
        keywords: &["navigation", "url", "redirect", "page not found", "404"],
        base_severity: Severity::High,
        remediations: &[
            "Verify the base URL is correct for the test environment",
            "Check whether a redirect happened before the assertion",
            "Navigate with an explicit timeout",
            "Verify the user has permission to access the page",
            "Check authentication token validity",
        ],
    },
    Signature {
        name: SignatureName::Permission,
        keywords: &["permission", "unauthorized", "403", "401", "access denied"],
        base_severity: Severity::Critical,
        remediations: &[
            "Verify the test user credentials are correct",
            "Check that the user role has the required permissions",
            "Verify the authentication token is not expired",
            "Check whether the feature flag is enabled for the user",
            "Review access control rules in the backend",
        ],
    },
    Signature {
        name: SignatureName::Flakiness,
        keywords: &["intermittent", "sometimes passes", "race condition", "timing"],
        base_severity: Severity::High,
        remediations: &[
            "Increase wait times for dynamic content",
            "Ensure proper test isolation and cleanup",
            "Check for race conditions in async operations",
            "Use deterministic selectors instead of position-based ones",
            "Reduce test parallelization if runs conflict",
        ],
    },
];

/// Fallback returned when every signature scores zero.
const UNKNOWN_SIGNATURE: Signature = Signature {
    name: SignatureName::Unknown,
    keywords: &[],
    base_severity: Severity::Medium,
    remediations: &[
        "Read the error message carefully",
        "Review the test code and its assertions",
        "Run the test in headed mode for debugging",
        "Check recent code changes",
        "Review the test environment setup",
    ],
};

/// Outcome of matching an error text against the signature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureMatch {
    /// The winning signature (UNKNOWN when nothing scored)
    pub signature: &'static Signature,

    /// Number of distinct keywords found in the error text
    pub keyword_hits: usize,
}

/// Read-only accessor over the static signature table.
///
/// Pure: matching has no side effects and the table is never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternLibrary;

impl PatternLibrary {
    pub fn new() -> Self {
        Self
    }

    /// Match an error text against every signature.
    ///
    /// Scoring counts each keyword once regardless of how often it occurs.
    /// The strictly highest score wins; ties keep the earlier-declared
    /// signature. A zero score everywhere yields the UNKNOWN signature.
    pub fn match_error(&self, error_text: &str) -> SignatureMatch {
        let lower = error_text.to_lowercase();

        let mut best = SignatureMatch {
            signature: &UNKNOWN_SIGNATURE,
            keyword_hits: 0,
        };

        for signature in SIGNATURES {
            let score = signature
                .keywords
                .iter()
                .filter(|kw| lower.contains(*kw))
                .count();

            // Strictly greater: earlier declaration wins ties.
            if score > best.keyword_hits {
                best = SignatureMatch {
                    signature,
                    keyword_hits: score,
                };
            }
        }

        best
    }

    /// All concrete signatures in declaration order (UNKNOWN excluded).
    pub fn all(&self) -> &'static [Signature] {
        SIGNATURES
    }

    /// The reserved fallback signature.
    pub fn unknown(&self) -> &'static Signature {
        &UNKNOWN_SIGNATURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_returns_unknown() {
        let library = PatternLibrary::new();
        let m = library.match_error("completely unrelated text");
        assert_eq!(m.signature.name, SignatureName::Unknown);
        assert_eq!(m.keyword_hits, 0);
        assert!(!m.signature.remediations.is_empty());
    }

    #[test]
    fn test_single_signature_keywords() {
        let library = PatternLibrary::new();
        let m = library.match_error("access denied: 403 unauthorized");
        assert_eq!(m.signature.name, SignatureName::Permission);
        assert_eq!(m.keyword_hits, 3);
    }

    #[test]
    fn test_keyword_counted_once_per_signature() {
        let library = PatternLibrary::new();
        // "null" appears twice but counts once
        let m = library.match_error("null is null");
        assert_eq!(m.signature.name, SignatureName::NullReference);
        assert_eq!(m.keyword_hits, 1);
    }

    #[test]
    fn test_substring_matching_inside_words() {
        let library = PatternLibrary::new();
        // "url" matches inside "curl" by design
        let m = library.match_error("curl redirect loop");
        assert_eq!(m.signature.name, SignatureName::Navigation);
        assert_eq!(m.keyword_hits, 2);
    }

    #[test]
    fn test_tie_break_prefers_declaration_order() {
        let library = PatternLibrary::new();
        // One TIMEOUT_SELECTOR keyword and one ASSERTION_MISMATCH keyword:
        // the earlier-declared timeout signature wins the tie.
        let m = library.match_error("timeout while comparing expected output");
        assert_eq!(m.keyword_hits, 1);
        assert_eq!(m.signature.name, SignatureName::TimeoutSelector);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let library = PatternLibrary::new();
        let m = library.match_error("TIMEOUT WAITING FOR ELEMENT");
        assert_eq!(m.signature.name, SignatureName::TimeoutSelector);
    }

    #[test]
    fn test_every_concrete_signature_has_keywords_and_remediations() {
        let library = PatternLibrary::new();
        for signature in library.all() {
            assert!(
                !signature.keywords.is_empty(),
                "{} must declare keywords",
                signature.name
            );
            assert!(!signature.remediations.is_empty());
            for kw in signature.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keywords must be lowercase");
            }
        }
        assert!(library.unknown().keywords.is_empty());
    }

    #[test]
    fn test_signature_name_serde() {
        let json = serde_json::to_string(&SignatureName::Api500).unwrap();
        assert_eq!(json, "\"API_500\"");
        let json = serde_json::to_string(&SignatureName::TimeoutSelector).unwrap();
        assert_eq!(json, "\"TIMEOUT_SELECTOR\"");
        let parsed: SignatureName = serde_json::from_str("\"NULL_REFERENCE\"").unwrap();
        assert_eq!(parsed, SignatureName::NullReference);
    }
}
