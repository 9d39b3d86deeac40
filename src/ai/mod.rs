//! Optional LLM-backed root cause analysis.
//!
//! A best-effort alternate path, deliberately separate from the
//! deterministic triage core. The language-model transport is an external
//! collaborator implementing [`CompletionProvider`]; this module owns the
//! prompt, the response parsing, and the fallback. Any provider or parse
//! failure degrades to a default low-confidence analysis rather than an
//! error, so callers never depend on model availability.

mod analyzer;
mod types;

pub use analyzer::{AiAnalyzer, AiError, CompletionProvider};
pub use types::RootCauseAnalysis;
