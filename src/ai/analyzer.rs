//! Analyzer driving a completion provider and parsing its answer.

use thiserror::Error;

use super::types::RootCauseAnalysis;

/// Errors internal to the model-backed path. The public analyze API is
/// infallible by fallback; these surface only through provider impls.
#[derive(Debug, Error)]
pub enum AiError {
    /// Provider-side failure (transport, auth, rate limit)
    #[error("completion provider error: {0}")]
    Provider(String),

    /// The completion text contained no JSON object
    #[error("completion contained no JSON object")]
    NoJsonObject,

    /// The extracted JSON did not parse into an analysis
    #[error("failed to parse analysis JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Seam for the external language-model collaborator.
///
/// Implementations own their transport, retries, and timeouts; the analyzer
/// only sees a prompt in and completion text out.
pub trait CompletionProvider {
    fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

/// Best-effort root cause analyzer over a completion provider.
#[derive(Debug)]
pub struct AiAnalyzer<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> AiAnalyzer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Analyze a failure. Never fails: provider errors and unparseable
    /// responses degrade to low-confidence fallback analyses.
    pub fn analyze(&self, test_name: &str, error_message: &str) -> RootCauseAnalysis {
        let prompt = build_prompt(test_name, error_message);

        match self.provider.complete(&prompt) {
            Ok(completion) => match parse_analysis(&completion) {
                Ok(mut analysis) => {
                    if analysis.test_name.is_empty() {
                        analysis.test_name = test_name.to_string();
                    }
                    if analysis.error_message.is_empty() {
                        analysis.error_message = error_message.to_string();
                    }
                    analysis
                }
                Err(_) => RootCauseAnalysis::unparseable(test_name, error_message),
            },
            Err(_) => RootCauseAnalysis::unavailable(test_name, error_message),
        }
    }
}

fn build_prompt(test_name: &str, error_message: &str) -> String {
    format!(
        "Analyze this test failure and provide root cause suggestions.\n\
         \n\
         TEST NAME: {test_name}\n\
         ERROR MESSAGE: {error_message}\n\
         \n\
         Respond with a single JSON object with these fields:\n\
         {{\n\
           \"test_name\": \"...\",\n\
           \"error_message\": \"...\",\n\
           \"root_causes\": [\"most likely first\"],\n\
           \"severity\": \"CRITICAL|HIGH|MEDIUM|LOW\",\n\
           \"affected_areas\": [\"...\"],\n\
           \"recommended_actions\": [\"...\"],\n\
           \"similar_issues\": [\"...\"],\n\
           \"confidence_score\": 0.85\n\
         }}"
    )
}

/// Extract and parse the first JSON object found in the completion text.
/// Models often wrap the object in prose; take the outermost braces.
fn parse_analysis(completion: &str) -> Result<RootCauseAnalysis, AiError> {
    let start = completion.find('{').ok_or(AiError::NoJsonObject)?;
    let end = completion.rfind('}').ok_or(AiError::NoJsonObject)?;
    if end < start {
        return Err(AiError::NoJsonObject);
    }

    let json = &completion[start..=end];
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::Severity;

    struct FixedProvider(Result<String, String>);

    impl CompletionProvider for FixedProvider {
        fn complete(&self, _prompt: &str) -> Result<String, AiError> {
            self.0
                .clone()
                .map_err(AiError::Provider)
        }
    }

    #[test]
    fn test_parses_json_wrapped_in_prose() {
        let provider = FixedProvider(Ok(
            "Here is my analysis:\n{\"root_causes\": [\"stale selector\"], \
             \"severity\": \"HIGH\", \"confidence_score\": 0.8}\nHope that helps."
                .to_string(),
        ));
        let analyzer = AiAnalyzer::new(provider);

        let analysis = analyzer.analyze("crypto.results.spec.ts", "Timeout waiting for element");

        assert_eq!(analysis.root_causes, vec!["stale selector"]);
        assert_eq!(analysis.severity, Severity::High);
        // Missing identity fields are backfilled from the request
        assert_eq!(analysis.test_name, "crypto.results.spec.ts");
        assert_eq!(analysis.error_message, "Timeout waiting for element");
    }

    #[test]
    fn test_provider_failure_falls_back_to_unavailable() {
        let provider = FixedProvider(Err("connection refused".to_string()));
        let analyzer = AiAnalyzer::new(provider);

        let analysis = analyzer.analyze("t.spec.ts", "boom");

        assert_eq!(analysis.confidence_score, 0.0);
        assert_eq!(analysis.root_causes, vec!["Analysis service unavailable"]);
    }

    #[test]
    fn test_prose_without_json_falls_back_to_unparseable() {
        let provider = FixedProvider(Ok("I could not determine a cause.".to_string()));
        let analyzer = AiAnalyzer::new(provider);

        let analysis = analyzer.analyze("t.spec.ts", "boom");

        assert_eq!(analysis.confidence_score, 0.3);
        assert_eq!(analysis.root_causes, vec!["Unable to parse model response"]);
    }

    #[test]
    fn test_malformed_json_falls_back_to_unparseable() {
        let provider = FixedProvider(Ok("{\"root_causes\": [unterminated".to_string()));
        let analyzer = AiAnalyzer::new(provider);

        let analysis = analyzer.analyze("t.spec.ts", "boom");
        assert_eq!(analysis.confidence_score, 0.3);
    }

    #[test]
    fn test_parse_analysis_rejects_reversed_braces() {
        assert!(matches!(
            parse_analysis("} not json {"),
            Err(AiError::NoJsonObject)
        ));
    }

    #[test]
    fn test_prompt_carries_inputs() {
        let prompt = build_prompt("auth.spec.ts", "login failed");
        assert!(prompt.contains("auth.spec.ts"));
        assert!(prompt.contains("login failed"));
        assert!(prompt.contains("confidence_score"));
    }
}
