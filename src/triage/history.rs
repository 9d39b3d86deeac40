//! Historical test context: reliability scoring and flakiness analysis.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::Category;

/// Flakiness rate above which a test is flagged as flaky.
///
/// Fixed design constant: more than 1-in-10 historical intermittent failures
/// is worth flagging.
pub const FLAKINESS_THRESHOLD: f64 = 0.10;

/// Fixed stabilization advice for flaky tests.
const STABILITY_FIXES: &[&str] = &[
    "Add longer waits for dynamic content",
    "Use deterministic selectors instead of CSS classes",
    "Ensure proper test data isolation",
    "Reduce parallel execution to a single worker",
    "Add retry logic for intermittent failures",
];

/// Raw per-test statistics as stored in the history table.
///
/// The reliability score is deliberately absent here: it is derived from the
/// counts on every lookup so it can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestStats {
    /// Test category (free-text in source tables, folded into the closed set)
    pub category: Category,

    /// Subsystem label, genuinely free text
    pub module: String,

    /// Historical intermittent-failure rate in [0, 1]
    pub flakiness: f64,

    #[serde(default)]
    pub failure_count: u32,

    #[serde(default)]
    pub success_count: u32,

    #[serde(default)]
    pub avg_duration_ms: u64,
}

/// Historical profile of one named test with the reliability score computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub test_id: String,
    pub category: Category,
    pub module: String,
    pub flakiness: f64,
    pub failure_count: u32,
    pub success_count: u32,
    pub avg_duration_ms: u64,

    /// Percentage of historical runs that succeeded, 0 when no runs recorded
    pub reliability_score: f64,
}

impl TestRecord {
    /// True when the historical flakiness rate exceeds the threshold.
    pub fn is_flaky(&self) -> bool {
        self.flakiness > FLAKINESS_THRESHOLD
    }
}

/// Immutable lookup table of per-test historical statistics.
///
/// Populated once before classification starts; replacing the table means
/// building a new store and swapping it in whole, so in-flight lookups never
/// observe a partial update.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: HashMap<String, TestStats>,
}

impl HistoryStore {
    /// Store with no records; every lookup yields the default profile.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from explicit records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, TestStats)>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Built-in seed table of known tests.
    pub fn builtin() -> Self {
        let records = [
            (
                "crypto.results.spec.ts".to_string(),
                TestStats {
                    category: Category::Functional,
                    module: "Crypto Results".to_string(),
                    flakiness: 0.15,
                    failure_count: 5,
                    success_count: 85,
                    avg_duration_ms: 8500,
                },
            ),
            (
                "accessibility.spec.ts".to_string(),
                TestStats {
                    category: Category::Compliance,
                    module: "WCAG 2.1 AA".to_string(),
                    flakiness: 0.0,
                    failure_count: 9,
                    success_count: 3,
                    avg_duration_ms: 12000,
                },
            ),
            (
                "har.spec.ts".to_string(),
                TestStats {
                    category: Category::Api,
                    module: "HAR Testing".to_string(),
                    flakiness: 0.02,
                    failure_count: 1,
                    success_count: 99,
                    avg_duration_ms: 5000,
                },
            ),
            (
                "cryptoStatus.spec.ts".to_string(),
                TestStats {
                    category: Category::Functional,
                    module: "Crypto Status".to_string(),
                    flakiness: 0.20,
                    failure_count: 4,
                    success_count: 16,
                    avg_duration_ms: 9000,
                },
            ),
        ];

        Self::from_records(records)
    }

    /// Look up historical context for a test.
    ///
    /// A miss is a normal case (new tests, ad-hoc identifiers) and yields a
    /// default record rather than an error. The reliability score is
    /// recomputed on every call.
    pub fn analyze(&self, test_id: &str) -> TestRecord {
        match self.records.get(test_id) {
            Some(stats) => TestRecord {
                test_id: test_id.to_string(),
                category: stats.category,
                module: stats.module.clone(),
                flakiness: stats.flakiness,
                failure_count: stats.failure_count,
                success_count: stats.success_count,
                avg_duration_ms: stats.avg_duration_ms,
                reliability_score: reliability_score(stats.success_count, stats.failure_count),
            },
            None => TestRecord {
                test_id: test_id.to_string(),
                category: Category::Unknown,
                module: "Unclassified".to_string(),
                flakiness: 0.0,
                failure_count: 0,
                success_count: 0,
                avg_duration_ms: 0,
                reliability_score: 0.0,
            },
        }
    }

    /// True when the test's historical flakiness rate exceeds
    /// [`FLAKINESS_THRESHOLD`]. Unknown tests are never flaky.
    pub fn is_flaky(&self, test_id: &str) -> bool {
        self.records
            .get(test_id)
            .is_some_and(|stats| stats.flakiness > FLAKINESS_THRESHOLD)
    }

    /// Fixed stabilization recommendations, empty when the test is not flaky.
    ///
    /// Static advice by design: not derived from the specific test's data.
    pub fn suggest_stability_fixes(&self, test_id: &str) -> &'static [&'static str] {
        if self.is_flaky(test_id) {
            STABILITY_FIXES
        } else {
            &[]
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// `success / (success + failure) * 100`, defined as 0 when both counts are 0.
fn reliability_score(success_count: u32, failure_count: u32) -> f64 {
    let total = success_count + failure_count;
    if total == 0 {
        0.0
    } else {
        f64::from(success_count) / f64::from(total) * 100.0
    }
}
