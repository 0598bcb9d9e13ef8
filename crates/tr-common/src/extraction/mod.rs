//! Natural-language query -> `SearchRequirement`.
//!
//! `parser` tries the LLM path first and falls back to `rules`, which never
//! fails.

pub mod llm;
pub mod parser;
pub mod rules;

use std::time::Duration;

use thiserror::Error;

use crate::llm::LlmError;

/// Why the LLM path was abandoned. Logged, never returned to callers of
/// `RequirementParser::parse`.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("LLM call timed out after {0:?}")]
    Timeout(Duration),

    #[error("reply contains no JSON object")]
    NoJsonObject,

    #[error("reply does not match the requirement shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid experience range: {0}")]
    InvalidExperience(String),

    #[error("reply carries no criteria")]
    NoSignal,
}

impl ExtractionError {
    pub fn is_transient(&self) -> bool {
        match self {
            ExtractionError::Llm(err) => err.is_transient(),
            _ => false,
        }
    }
}
