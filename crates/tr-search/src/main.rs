use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use dotenvy::dotenv;
use tr_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use tr_common::{
    CandidateProfile, LlmConfig, RankingConfig, RankingEngine, RequirementParser, SearchResponse,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "tr-search",
    about = "Rank a candidate pool against a free-text job requirement"
)]
struct Cli {
    /// Recruiter query, e.g. "Fleet Manager, 5+ years, Gurgaon, SAP"
    #[arg(long, short)]
    query: String,

    /// JSON file holding an array of candidate profiles
    #[arg(long, short, env = "TR_CANDIDATES")]
    candidates: PathBuf,

    /// Keep only the top N results
    #[arg(long)]
    limit: Option<usize>,

    /// Skip the LLM even when LLM_ENABLED is set
    #[arg(long, default_value_t = false)]
    rules_only: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn load_candidates(path: &Path) -> Result<Vec<CandidateProfile>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    let candidates: Vec<CandidateProfile> = serde_json::from_str(&raw)
        .map_err(|err| format!("failed to parse {}: {err}", path.display()))?;
    Ok(candidates)
}

fn build_parser(config: &LlmConfig, rules_only: bool) -> RequirementParser {
    if rules_only {
        RequirementParser::rules_only()
    } else {
        RequirementParser::from_config(config)
    }
}

async fn search(
    args: &Cli,
    parser: &RequirementParser,
    engine: &RankingEngine,
    candidates: &[CandidateProfile],
) -> SearchResponse {
    let parsed = parser.parse(&args.query).await;
    info!(
        method = parsed.method.as_ref(),
        role = parsed.requirement.role.as_deref().unwrap_or("-"),
        location = parsed.requirement.location.as_deref().unwrap_or("-"),
        skills = parsed.requirement.skills.len(),
        "requirement parsed"
    );

    let mut results = engine.rank(&parsed.requirement, candidates);
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    SearchResponse::new(
        args.query.clone(),
        parsed.requirement,
        parsed.method,
        candidates.len(),
        results,
        Utc::now(),
    )
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_tracing_subscriber("tr-search");
    install_tracing_panic_hook("tr-search");

    let args = Cli::parse();
    let llm_config = LlmConfig::from_env();
    let ranking_config = RankingConfig::from_env();
    info!(
        llm_enabled = llm_config.enabled && !args.rules_only,
        llm_provider = %llm_config.provider,
        llm_model = %llm_config.model,
        min_relevance = ranking_config.min_relevance,
        role_gate = ranking_config.role_gate,
        "starting search"
    );

    let candidates = load_candidates(&args.candidates)?;
    let parser = build_parser(&llm_config, args.rules_only);
    let engine = RankingEngine::new(ranking_config);

    let response = search(&args, &parser, &engine, &candidates).await;
    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("tr-search failed: {err}");
        std::process::exit(1);
    }
}
