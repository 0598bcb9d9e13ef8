use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{LlmConfig, LlmError, TextGenerator};

const SYSTEM_PROMPT: &str =
    "You extract structured hiring criteria from recruiter queries. Reply with a single JSON object only.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for any OpenAI-style `/chat/completions` endpoint
/// (OpenAI, Groq, DeepSeek, Ollama).
pub struct OpenAiCompatibleGenerator {
    provider: String,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f64,
    client: Client,
}

impl OpenAiCompatibleGenerator {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        if config.requires_api_key() && config.api_key.trim().is_empty() {
            return Err(LlmError::Provider(format!(
                "no API key configured for provider {}",
                config.provider
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            provider = %config.provider,
            model = %config.model,
            "LLM generator initialized"
        );

        Ok(Self {
            provider: config.provider.clone(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
            response_format: ResponseFormat {
                r#type: "json_object",
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatResponse = serde_json::from_str(&response.text().await?)?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Provider("no choices in response".to_string()))
    }

    fn name(&self) -> &str {
        &self.provider
    }
}
