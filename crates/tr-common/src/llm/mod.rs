//! Text-generation backends used by the LLM extraction path.

pub mod config;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use config::LlmConfig;
pub use openai::OpenAiCompatibleGenerator;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider error: {0}")]
    Provider(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request timed out")]
    Timeout,
}

impl LlmError {
    /// Worth one more attempt: 5xx, 429 / 529 overload, or a transport-level
    /// connect / timeout failure.
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::Status { status, .. } => *status >= 500 || *status == 429,
            LlmError::Http(err) => err.is_timeout() || err.is_connect(),
            LlmError::Timeout => true,
            LlmError::Provider(_) | LlmError::Json(_) => false,
        }
    }
}

/// Anything that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    fn name(&self) -> &str;
}

#[async_trait]
impl TextGenerator for Arc<dyn TextGenerator> {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        (**self).generate(prompt).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_transient_statuses() {
        let status = |status| LlmError::Status {
            status,
            body: String::new(),
        };

        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
        assert!(status(529).is_transient());
        assert!(status(429).is_transient());
        assert!(!status(400).is_transient());
        assert!(!status(401).is_transient());
        assert!(LlmError::Timeout.is_transient());
        assert!(!LlmError::Provider("no choices".into()).is_transient());
    }
}
