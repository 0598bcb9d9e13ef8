use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Settings for the LLM extraction path, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub enabled: bool,
    pub provider: String,
    pub model: String,
    pub endpoint: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        let (model, endpoint) = provider_defaults("openai");
        Self {
            enabled: false,
            provider: "openai".into(),
            model,
            endpoint,
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            temperature: 0.0,
        }
    }
}

/// (model, chat-completions endpoint) presets per provider.
fn provider_defaults(provider: &str) -> (String, String) {
    match provider.to_ascii_lowercase().as_str() {
        "groq" => (
            "llama-3.1-8b-instant".into(),
            "https://api.groq.com/openai/v1/chat/completions".into(),
        ),
        "deepseek" => (
            "deepseek-chat".into(),
            "https://api.deepseek.com/v1/chat/completions".into(),
        ),
        "ollama" => (
            "llama3.1".into(),
            "http://localhost:11434/v1/chat/completions".into(),
        ),
        _ => (
            "gpt-4o-mini".into(),
            "https://api.openai.com/v1/chat/completions".into(),
        ),
    }
}

fn provider_api_key(provider: &str) -> Option<String> {
    match provider.to_ascii_lowercase().as_str() {
        "openai" => std::env::var("OPENAI_API_KEY").ok(),
        "groq" => std::env::var("GROQ_API_KEY").ok(),
        "deepseek" => std::env::var("DEEPSEEK_API_KEY").ok(),
        _ => None,
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        fn parse_bool(key: &str, default: bool) -> bool {
            match std::env::var(key) {
                Ok(val) => matches!(val.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
                Err(_) => default,
            }
        }

        fn parse_u64(key: &str, default: u64) -> u64 {
            std::env::var(key)
                .ok()
                .and_then(|raw| raw.parse::<u64>().ok())
                .unwrap_or(default)
        }

        fn parse_u32(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|raw| raw.parse::<u32>().ok())
                .unwrap_or(default)
        }

        fn parse_f64(key: &str, default: f64) -> f64 {
            std::env::var(key)
                .ok()
                .and_then(|raw| raw.parse::<f64>().ok())
                .unwrap_or(default)
        }

        let provider = std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".into());
        let (default_model, default_endpoint) = provider_defaults(&provider);
        let api_key = std::env::var("LLM_API_KEY")
            .ok()
            .or_else(|| provider_api_key(&provider))
            .unwrap_or_default();

        Self {
            enabled: parse_bool("LLM_ENABLED", false),
            model: std::env::var("LLM_MODEL").unwrap_or(default_model),
            endpoint: std::env::var("LLM_ENDPOINT").unwrap_or(default_endpoint),
            api_key,
            timeout_secs: parse_u64("LLM_TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECS).max(1),
            max_retries: parse_u32("LLM_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            temperature: parse_f64("LLM_TEMPERATURE", 0.0).clamp(0.0, 2.0),
            provider,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Ollama runs locally without a key; every other provider needs one.
    pub fn requires_api_key(&self) -> bool {
        !self.provider.eq_ignore_ascii_case("ollama")
    }
}
