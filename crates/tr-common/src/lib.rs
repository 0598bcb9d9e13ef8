pub mod api;
pub mod extraction;
pub mod lexicon;
pub mod llm;
pub mod logging;
pub mod matching;
pub mod normalize;

use serde::{Deserialize, Serialize};

pub use api::search_response::{
    MatchDetail, MatchStatus, ScoreShare, ScoredCandidate, SearchResponse,
};
pub use extraction::parser::{ExtractionMethod, ParsedRequirement, RequirementParser};
pub use llm::{LlmConfig, LlmError, TextGenerator};
pub use matching::dimension::Dimension;
pub use matching::gate::GateDecision;
pub use matching::pipeline::RankingEngine;
pub use matching::scoring::RankingConfig;

/// Years-of-experience bounds. All fields absent means "no constraint".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub exact: Option<f64>,
}

impl ExperienceRange {
    pub fn is_unconstrained(&self) -> bool {
        self.min.is_none() && self.max.is_none() && self.exact.is_none()
    }
}

/// Structured form of a recruiter's free-text query. Built once per query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequirement {
    pub role: Option<String>,
    pub experience: Option<ExperienceRange>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub certifications: Vec<String>,
    pub industry: Option<String>,
    /// Display-only extras such as salary hints; never scored.
    pub specific_requirements: Vec<String>,
    pub implied_responsibilities: Vec<String>,
}

impl SearchRequirement {
    pub fn role(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(self.location.as_deref())
    }

    pub fn education(&self) -> Option<&str> {
        non_blank(self.education.as_deref())
    }

    pub fn experience(&self) -> Option<&ExperienceRange> {
        self.experience
            .as_ref()
            .filter(|range| !range.is_unconstrained())
    }

    /// Non-blank skills, trimmed, in input order.
    pub fn skills(&self) -> Vec<&str> {
        non_blank_items(&self.skills)
    }

    pub fn responsibilities(&self) -> Vec<&str> {
        non_blank_items(&self.implied_responsibilities)
    }

    /// True when no scoreable field carries a signal.
    pub fn is_empty(&self) -> bool {
        self.role().is_none()
            && self.experience().is_none()
            && self.location().is_none()
            && self.skills().is_empty()
            && self.education().is_none()
            && self.responsibilities().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub role: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub description: Option<String>,
}

/// Candidate record as persisted upstream. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub current_role: Option<String>,
    pub desired_role: Option<String>,
    pub location: Option<String>,
    pub total_experience: Option<String>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tags: Vec<String>,
    pub highest_qualification: Option<String>,
    pub degree: Option<String>,
    pub resume_text: Option<String>,
    pub summary: Option<String>,
    pub key_achievements: Vec<String>,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<ProjectEntry>,
}

impl CandidateProfile {
    /// Current role, falling back to the desired role.
    pub fn role(&self) -> Option<&str> {
        non_blank(self.current_role.as_deref()).or_else(|| non_blank(self.desired_role.as_deref()))
    }

    /// Technical skills, soft skills and tags in one pass.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.technical_skills
            .iter()
            .chain(self.soft_skills.iter())
            .chain(self.tags.iter())
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn non_blank_items(items: &[String]) -> Vec<&str> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}
