//! Clasificar: deterministic test-failure triage
//!
//! Classifies automated-test failure reports in three stateless stages:
//!
//! 1. **Signature matching** — scores the error text against a library of
//!    known failure signatures (keyword sets, base severity, remediation
//!    steps).
//! 2. **History context** — looks up per-test historical statistics and
//!    derives a reliability score and flakiness verdict.
//! 3. **Severity resolution** — fuses the signature's base severity, keyword
//!    overrides in the error text, and the test's category into one final
//!    severity label.
//!
//! All three stages are pure functions over immutable tables, so any number
//! of classification calls may run concurrently without coordination.
//!
//! # Example
//!
//! ```
//! use clasificar::{Severity, SignatureName, TriageEngine};
//!
//! let engine = TriageEngine::new();
//! let result = engine.classify(
//!     "crypto.results.spec.ts",
//!     "Timeout waiting for element '.crypto-tab-definitions' after 30000ms",
//! );
//!
//! assert_eq!(result.signature, SignatureName::TimeoutSelector);
//! assert_eq!(result.severity, Severity::High);
//! ```
//!
//! The [`ai`] module provides an optional, best-effort LLM-backed analysis
//! path behind a provider trait. It is a separate collaborator and never
//! affects the deterministic results above.

pub mod ai;
pub mod cli;
pub mod config;
pub mod report;
pub mod triage;

pub use triage::{
    Category, ClassificationResult, HistoryStore, PatternLibrary, Severity, Signature,
    SignatureName, TestRecord, TriageEngine,
};
