use std::sync::Arc;

use async_trait::async_trait;
use tr_common::{
    CandidateProfile, Dimension, ExtractionMethod, LlmError, RankingEngine, RequirementParser,
    TextGenerator,
};

struct FixedReply(&'static str);

#[async_trait]
impl TextGenerator for FixedReply {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.0.to_string())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

struct AlwaysDown;

#[async_trait]
impl TextGenerator for AlwaysDown {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Status {
            status: 503,
            body: "upstream unavailable".into(),
        })
    }

    fn name(&self) -> &str {
        "down"
    }
}

fn pool() -> Vec<CandidateProfile> {
    serde_json::from_str(
        r#"[
            {"id": "exec", "currentRole": "Warehouse Executive", "totalExperience": "5 years",
             "location": "Navi Mumbai", "technicalSkills": ["SAP", "Excel"],
             "resumeText": "Managed warehouse operations and helped maintain inventory accuracy across two sites."},
            {"id": "dev", "currentRole": "Software Developer", "totalExperience": "5 years",
             "location": "Mumbai", "technicalSkills": ["SAP"]},
            {"id": "sparse", "name": "No details"}
        ]"#,
    )
    .unwrap()
}

fn ids(results: &[tr_common::ScoredCandidate]) -> Vec<&str> {
    results
        .iter()
        .filter_map(|r| r.candidate.id.as_deref())
        .collect()
}

#[tokio::test]
async fn rules_path_feeds_the_ranking() {
    let parser = RequirementParser::rules_only();
    let parsed = parser
        .parse("Warehouse Manager with 3+ years in Mumbai, SAP")
        .await;

    assert_eq!(parsed.method, ExtractionMethod::Rules);
    assert!(!parsed.requirement.implied_responsibilities.is_empty());

    let ranked = RankingEngine::default().rank(&parsed.requirement, &pool());
    assert_eq!(ids(&ranked), vec!["exec"]);
    assert!(ranked[0].detail(Dimension::Responsibility).is_some());
}

#[tokio::test]
async fn llm_reply_drives_the_ranking() {
    let parser = RequirementParser::with_generator(Arc::new(FixedReply(
        r#"```json
        {"role": "Warehouse Manager", "experience": {"min": 3}, "location": "Mumbai",
         "skills": ["SAP"], "certifications": [], "specificRequirements": [],
         "impliedResponsibilities": []}
        ```"#,
    )));

    let parsed = parser.parse("warehouse lead for mumbai, sap").await;
    assert_eq!(parsed.method, ExtractionMethod::Llm);

    let ranked = RankingEngine::default().rank(&parsed.requirement, &pool());
    assert_eq!(ids(&ranked), vec!["exec"]);
    assert!(ranked[0].relevance_score >= 0.9);
}

#[tokio::test]
async fn provider_outage_still_returns_a_ranking() {
    let parser = RequirementParser::with_generator(Arc::new(AlwaysDown));
    let parsed = parser.parse("Warehouse Manager, Mumbai, SAP").await;

    assert_eq!(parsed.method, ExtractionMethod::Rules);
    assert_eq!(parsed.requirement.role.as_deref(), Some("Warehouse Manager"));

    let ranked = RankingEngine::default().rank(&parsed.requirement, &pool());
    assert_eq!(ids(&ranked), vec!["exec"]);
}

#[tokio::test]
async fn query_without_signal_ranks_nothing() {
    let parser = RequirementParser::with_generator(Arc::new(FixedReply(r#"{"role": null}"#)));
    let parsed = parser.parse("hello there").await;

    assert_eq!(parsed.method, ExtractionMethod::Rules);
    assert!(parsed.requirement.is_empty());
    assert!(RankingEngine::default().rank(&parsed.requirement, &pool()).is_empty());
}
