//! Property tests for the triage core.
//!
//! Invariants checked:
//! - Classification is deterministic and idempotent.
//! - Texts with no configured keywords always fall back to UNKNOWN.
//! - Resolved severity is always a valid label and never below the
//!   category floor for high-impact categories.
//! - Reliability scores stay within [0, 100]; confidence within (0, 1).

use clasificar::triage::{
    resolve_severity, Category, HistoryStore, PatternLibrary, Severity, SignatureName, TestStats,
    TriageEngine,
};
use proptest::prelude::*;

/// Arbitrary error text, printable ASCII.
fn error_text() -> impl Strategy<Value = String> {
    "[ -~]{0,120}"
}

/// Error text built from an alphabet no keyword can be spelled from.
/// Every configured keyword contains at least one of a/e/i/o/u or a digit.
fn keyword_free_text() -> impl Strategy<Value = String> {
    "[xzqXZQ ]{0,60}"
}

fn any_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Functional),
        Just(Category::Api),
        Just(Category::Compliance),
        Just(Category::Authentication),
        Just(Category::Payment),
        Just(Category::Unknown),
    ]
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
        Just(Severity::Critical),
    ]
}

proptest! {
    #[test]
    fn prop_match_is_deterministic(text in error_text()) {
        let library = PatternLibrary::new();
        let first = library.match_error(&text);
        let second = library.match_error(&text);
        prop_assert_eq!(first.signature.name, second.signature.name);
        prop_assert_eq!(first.keyword_hits, second.keyword_hits);
    }

    #[test]
    fn prop_keyword_free_text_is_unknown(text in keyword_free_text()) {
        let library = PatternLibrary::new();
        let m = library.match_error(&text);
        prop_assert_eq!(m.signature.name, SignatureName::Unknown);
        prop_assert_eq!(m.keyword_hits, 0);
    }

    #[test]
    fn prop_resolved_severity_is_valid_score(
        text in error_text(),
        category in any_category(),
        base in any_severity(),
    ) {
        let resolved = resolve_severity(&text, category, base);
        prop_assert!((1..=4).contains(&resolved.score()));
    }

    #[test]
    fn prop_high_impact_category_floors_at_high(
        text in error_text(),
        base in any_severity(),
    ) {
        for category in [Category::Api, Category::Authentication, Category::Payment] {
            let resolved = resolve_severity(&text, category, base);
            prop_assert!(
                resolved >= Severity::High,
                "high-impact category resolved below HIGH: {} for {:?}",
                resolved,
                text
            );
        }
    }

    #[test]
    fn prop_resolution_never_lowers_below_non_text_result(
        text in keyword_free_text(),
        category in any_category(),
        base in any_severity(),
    ) {
        // With no keyword signal, resolution can only apply the category
        // floor, never lower the base severity.
        let resolved = resolve_severity(&text, category, base);
        prop_assert!(resolved.score() >= base.score());
    }

    #[test]
    fn prop_classification_idempotent(
        test_id in "[a-z.]{1,30}",
        text in error_text(),
    ) {
        let engine = TriageEngine::new();
        let a = engine.classify(&test_id, &text);
        let b = engine.classify(&test_id, &text);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_confidence_bounded(
        test_id in "[a-z.]{1,30}",
        text in error_text(),
    ) {
        let engine = TriageEngine::new();
        let result = engine.classify(&test_id, &text);
        prop_assert!(result.confidence > 0.0 && result.confidence < 1.0);
    }

    #[test]
    fn prop_reliability_score_bounded(
        failure_count in 0u32..=10_000,
        success_count in 0u32..=10_000,
        flakiness in 0.0f64..=1.0,
    ) {
        let store = HistoryStore::from_records([(
            "t".to_string(),
            TestStats {
                category: Category::Functional,
                module: "m".to_string(),
                flakiness,
                failure_count,
                success_count,
                avg_duration_ms: 0,
            },
        )]);
        let record = store.analyze("t");
        prop_assert!((0.0..=100.0).contains(&record.reliability_score));
        prop_assert!(!record.reliability_score.is_nan());
    }

    #[test]
    fn prop_unknown_tests_never_flaky(test_id in "[A-Za-z0-9._-]{1,40}") {
        let store = HistoryStore::empty();
        prop_assert!(!store.is_flaky(&test_id));
        prop_assert!(store.suggest_stability_fixes(&test_id).is_empty());
    }
}
