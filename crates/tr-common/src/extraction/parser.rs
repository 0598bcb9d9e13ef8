use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use tracing::{debug, info, warn};

use super::{ExtractionError, llm, rules};
use crate::SearchRequirement;
use crate::llm::config::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::llm::{LlmConfig, OpenAiCompatibleGenerator, TextGenerator};

/// Which path produced the requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExtractionMethod {
    Llm,
    Rules,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRequirement {
    pub requirement: SearchRequirement,
    pub method: ExtractionMethod,
}

/// Query -> `SearchRequirement`. With a generator attached the LLM path runs
/// first; any failure there falls through to the rule-based extractor.
#[derive(Clone)]
pub struct RequirementParser {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
    max_retries: u32,
}

impl fmt::Debug for RequirementParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequirementParser")
            .field("generator", &self.generator.as_ref().map(|g| g.name().to_string()))
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl Default for RequirementParser {
    fn default() -> Self {
        Self::rules_only()
    }
}

impl RequirementParser {
    pub fn rules_only() -> Self {
        Self {
            generator: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
            ..Self::rules_only()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// LLM-backed when enabled and the generator can be built; rules-only
    /// otherwise.
    pub fn from_config(config: &LlmConfig) -> Self {
        if !config.enabled {
            return Self::rules_only();
        }

        match OpenAiCompatibleGenerator::new(config) {
            Ok(generator) => Self::with_generator(Arc::new(generator))
                .timeout(config.timeout())
                .max_retries(config.max_retries),
            Err(err) => {
                warn!(error = %err, "LLM extraction disabled; using rules only");
                Self::rules_only()
            }
        }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Never fails. The worst case is an empty requirement from the rules.
    pub async fn parse(&self, query: &str) -> ParsedRequirement {
        if let Some(generator) = self.generator.as_ref().filter(|_| !query.trim().is_empty()) {
            match self.parse_with_llm(generator.as_ref(), query).await {
                Ok(requirement) => {
                    info!(provider = generator.name(), "requirement extracted by LLM");
                    return ParsedRequirement {
                        requirement,
                        method: ExtractionMethod::Llm,
                    };
                }
                Err(err) => {
                    warn!(
                        provider = generator.name(),
                        error = %err,
                        "LLM extraction failed; falling back to rules"
                    );
                }
            }
        }

        ParsedRequirement {
            requirement: rules::extract_requirement(query),
            method: ExtractionMethod::Rules,
        }
    }

    async fn parse_with_llm(
        &self,
        generator: &dyn TextGenerator,
        query: &str,
    ) -> Result<SearchRequirement, ExtractionError> {
        let prompt = llm::build_prompt(query);
        let mut attempt = 0u32;

        let reply = loop {
            attempt += 1;
            let result = match tokio::time::timeout(self.timeout, generator.generate(&prompt)).await {
                Ok(result) => result.map_err(ExtractionError::from),
                Err(_) => Err(ExtractionError::Timeout(self.timeout)),
            };

            match result {
                Ok(reply) => break reply,
                Err(err) if err.is_transient() && attempt <= self.max_retries => {
                    debug!(attempt, error = %err, "transient LLM failure; retrying");
                }
                Err(err) => return Err(err),
            }
        };

        llm::parse_reply(&reply)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::llm::LlmError;

    /// Replays scripted outcomes, then repeats the last one.
    struct ScriptedGenerator {
        script: Vec<Result<String, u16>>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        fn new(script: Vec<Result<&str, u16>>) -> Arc<Self> {
            Arc::new(Self {
                script: script.into_iter().map(|r| r.map(str::to_string)).collect(),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let step = &self.script[call.min(self.script.len() - 1)];
            match step {
                Ok(reply) => Ok(reply.clone()),
                Err(status) => Err(LlmError::Status {
                    status: *status,
                    body: "scripted".into(),
                }),
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    struct StalledGenerator;

    #[async_trait]
    impl TextGenerator for StalledGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("{}".into())
        }

        fn name(&self) -> &str {
            "stalled"
        }
    }

    const GOOD_REPLY: &str =
        r#"{"role": "Warehouse Manager", "location": "Mumbai", "skills": ["SAP"]}"#;

    #[tokio::test]
    async fn rules_only_parser_uses_rules() {
        let parsed = RequirementParser::rules_only()
            .parse("Fleet Manager, 5+ years, Gurgaon, SAP")
            .await;

        assert_eq!(parsed.method, ExtractionMethod::Rules);
        assert_eq!(parsed.requirement.role.as_deref(), Some("Fleet Manager"));
    }

    #[tokio::test]
    async fn valid_llm_reply_is_used() {
        let generator = ScriptedGenerator::new(vec![Ok(GOOD_REPLY)]);
        let parser = RequirementParser::with_generator(generator.clone());

        let parsed = parser.parse("warehouse manager mumbai sap").await;
        assert_eq!(parsed.method, ExtractionMethod::Llm);
        assert_eq!(parsed.requirement.location.as_deref(), Some("Mumbai"));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn retries_once_on_overload_then_succeeds() {
        let generator = ScriptedGenerator::new(vec![Err(529), Ok(GOOD_REPLY)]);
        let parser = RequirementParser::with_generator(generator.clone());

        let parsed = parser.parse("warehouse manager").await;
        assert_eq!(parsed.method, ExtractionMethod::Llm);
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn gives_up_after_one_retry() {
        let generator = ScriptedGenerator::new(vec![Err(503)]);
        let parser = RequirementParser::with_generator(generator.clone());

        let parsed = parser.parse("Driver in Chennai").await;
        assert_eq!(parsed.method, ExtractionMethod::Rules);
        assert_eq!(parsed.requirement.role.as_deref(), Some("Driver"));
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let generator = ScriptedGenerator::new(vec![Err(401)]);
        let parser = RequirementParser::with_generator(generator.clone());

        let parsed = parser.parse("Driver").await;
        assert_eq!(parsed.method, ExtractionMethod::Rules);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn malformed_reply_falls_back() {
        for reply in [
            "I could not understand the query.",
            r#"{"role": 42}"#,
            r#"{"role": "Driver", "experience": {"min": 9, "max": 3}}"#,
            r#"{"role": null}"#,
        ] {
            let generator = ScriptedGenerator::new(vec![Ok(reply)]);
            let parser = RequirementParser::with_generator(generator);

            let parsed = parser.parse("Accountant with Tally").await;
            assert_eq!(parsed.method, ExtractionMethod::Rules, "reply: {reply}");
            assert_eq!(parsed.requirement.role.as_deref(), Some("Accountant"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_generator_times_out_into_rules() {
        let parser = RequirementParser::with_generator(Arc::new(StalledGenerator))
            .timeout(Duration::from_secs(8));

        let parsed = parser.parse("Storekeeper in Pune").await;
        assert_eq!(parsed.method, ExtractionMethod::Rules);
        assert_eq!(parsed.requirement.location.as_deref(), Some("Pune"));
    }

    #[tokio::test]
    async fn blank_query_skips_the_llm() {
        let generator = ScriptedGenerator::new(vec![Ok(GOOD_REPLY)]);
        let parser = RequirementParser::with_generator(generator.clone());

        let parsed = parser.parse("   ").await;
        assert_eq!(parsed.method, ExtractionMethod::Rules);
        assert!(parsed.requirement.is_empty());
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn disabled_config_builds_rules_only_parser() {
        let parser = RequirementParser::from_config(&LlmConfig::default());
        assert!(!parser.has_generator());
    }
}
