use std::collections::BTreeMap;

use super::{
    dimension::Dimension,
    education::score_education,
    experience::score_experience,
    gate::GateThresholds,
    location::score_location,
    responsibility::score_responsibilities,
    role::score_role,
    skills::score_skills,
    weights::Weights,
};
use crate::api::search_response::{MatchDetail, MatchStatus, ScoreShare};
use crate::{CandidateProfile, SearchRequirement};

pub const MIN_RELEVANCE_SCORE: f64 = 0.50;
pub const ROLE_GATE_THRESHOLD: f64 = 0.3;
/// Relevance never reaches 1.0.
pub const RELEVANCE_CAP: f64 = 0.99;
/// Pool size from which per-candidate scoring fans out across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// A score bound, strict (`>`) or inclusive (`>=`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusThreshold {
    pub value: f64,
    pub inclusive: bool,
}

impl StatusThreshold {
    pub const fn above(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }

    pub const fn at_least(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub fn admits(&self, score: f64) -> bool {
        if self.inclusive {
            score >= self.value
        } else {
            score > self.value
        }
    }
}

/// Match / partial bounds for one dimension; anything below partial is a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusBands {
    pub matched: StatusThreshold,
    pub partial: StatusThreshold,
}

impl StatusBands {
    pub fn classify(&self, score: f64) -> MatchStatus {
        if self.matched.admits(score) {
            MatchStatus::Match
        } else if self.partial.admits(score) {
            MatchStatus::Partial
        } else {
            MatchStatus::Miss
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusTable {
    pub role: StatusBands,
    pub experience: StatusBands,
    pub location: StatusBands,
    pub skills: StatusBands,
    pub education: StatusBands,
    pub responsibility: StatusBands,
}

const GENERAL_BANDS: StatusBands = StatusBands {
    matched: StatusThreshold::above(0.6),
    partial: StatusThreshold::above(0.2),
};

pub const DEFAULT_STATUS_TABLE: StatusTable = StatusTable {
    // A synonym hit (0.8) counts as a match.
    role: StatusBands {
        matched: StatusThreshold::at_least(0.8),
        partial: StatusThreshold::at_least(0.3),
    },
    experience: StatusBands {
        matched: StatusThreshold::above(0.8),
        partial: StatusThreshold::above(0.2),
    },
    location: StatusBands {
        matched: StatusThreshold::above(0.8),
        partial: StatusThreshold::above(0.1),
    },
    skills: GENERAL_BANDS,
    education: GENERAL_BANDS,
    responsibility: GENERAL_BANDS,
};

impl Default for StatusTable {
    fn default() -> Self {
        DEFAULT_STATUS_TABLE
    }
}

impl StatusTable {
    pub fn for_dimension(&self, dimension: Dimension) -> &StatusBands {
        match dimension {
            Dimension::Role => &self.role,
            Dimension::Experience => &self.experience,
            Dimension::Location => &self.location,
            Dimension::Skills => &self.skills,
            Dimension::Education => &self.education,
            Dimension::Responsibility => &self.responsibility,
        }
    }
}

/// Everything the ranking engine is parameterised by. Passed in at
/// construction; nothing here is global.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    pub weights: Weights,
    pub statuses: StatusTable,
    pub min_relevance: f64,
    pub role_gate: f64,
    pub relevance_cap: f64,
    pub parallel_threshold: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            statuses: StatusTable::default(),
            min_relevance: MIN_RELEVANCE_SCORE,
            role_gate: ROLE_GATE_THRESHOLD,
            relevance_cap: RELEVANCE_CAP,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl RankingConfig {
    /// Defaults with `TR_MIN_RELEVANCE`, `TR_ROLE_GATE` and
    /// `TR_PARALLEL_THRESHOLD` overrides.
    pub fn from_env() -> Self {
        fn parse_f64(key: &str, default: f64) -> f64 {
            std::env::var(key)
                .ok()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(default)
        }

        fn parse_usize(key: &str, default: usize) -> usize {
            std::env::var(key)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        }

        let defaults = Self::default();
        Self {
            min_relevance: parse_f64("TR_MIN_RELEVANCE", defaults.min_relevance).clamp(0.0, 1.0),
            role_gate: parse_f64("TR_ROLE_GATE", defaults.role_gate).clamp(0.0, 1.0),
            parallel_threshold: parse_usize("TR_PARALLEL_THRESHOLD", defaults.parallel_threshold),
            ..defaults
        }
    }

    pub fn gate_thresholds(&self) -> GateThresholds {
        GateThresholds {
            min_relevance: self.min_relevance,
            role_gate: self.role_gate,
        }
    }
}

/// Dimensions the requirement actually constrains, in reporting order.
pub fn active_dimensions(requirement: &SearchRequirement) -> Vec<Dimension> {
    let mut active = Vec::with_capacity(6);
    if requirement.role().is_some() {
        active.push(Dimension::Role);
    }
    if requirement.experience().is_some() {
        active.push(Dimension::Experience);
    }
    if requirement.location().is_some() {
        active.push(Dimension::Location);
    }
    if !requirement.skills().is_empty() {
        active.push(Dimension::Skills);
    }
    if requirement.education().is_some() {
        active.push(Dimension::Education);
    }
    if !requirement.responsibilities().is_empty() {
        active.push(Dimension::Responsibility);
    }
    active
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: f64,
    pub status: MatchStatus,
    pub details: String,
    pub earned: f64,
    pub max: f64,
}

impl From<&DimensionScore> for MatchDetail {
    fn from(value: &DimensionScore) -> Self {
        Self {
            category: value.dimension,
            status: value.status,
            score: value.score,
            message: value.details.clone(),
            weight: value.earned,
            max_weight: value.max,
        }
    }
}

/// Weighted aggregate for one candidate, before the gate.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    pub dimensions: Vec<DimensionScore>,
    pub earned: f64,
    pub max_possible: f64,
    /// 0〜100
    pub normalized: f64,
    /// `min(normalized / 100, cap)`
    pub relevance: f64,
}

impl CandidateScore {
    /// Raw role score, when role is active.
    pub fn role_score(&self) -> Option<f64> {
        self.dimensions
            .iter()
            .find(|d| d.dimension == Dimension::Role)
            .map(|d| d.score)
    }

    pub fn match_percentage(&self) -> u32 {
        (self.relevance * 100.0).round().clamp(0.0, 100.0) as u32
    }

    pub fn match_details(&self) -> Vec<MatchDetail> {
        self.dimensions.iter().map(MatchDetail::from).collect()
    }

    pub fn score_breakdown(&self) -> BTreeMap<Dimension, ScoreShare> {
        self.dimensions
            .iter()
            .map(|d| (d.dimension, ScoreShare::new(d.earned, d.max)))
            .collect()
    }

    pub fn gap_analysis(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .filter(|d| d.status == MatchStatus::Miss)
            .map(|d| d.dimension.label().to_string())
            .collect()
    }
}

/// Runs the six matchers for one candidate and folds them into a weighted,
/// requirement-shaped score.
#[derive(Debug, Clone)]
pub struct CandidateScorer {
    config: RankingConfig,
}

impl CandidateScorer {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn score(&self, requirement: &SearchRequirement, candidate: &CandidateProfile) -> CandidateScore {
        let dimensions: Vec<DimensionScore> = active_dimensions(requirement)
            .into_iter()
            .filter_map(|dimension| self.score_dimension(dimension, requirement, candidate))
            .collect();

        let earned: f64 = dimensions.iter().map(|d| d.earned).sum();
        let max_possible: f64 = dimensions.iter().map(|d| d.max).sum();
        let normalized = if max_possible > 0.0 {
            earned / max_possible * 100.0
        } else {
            0.0
        };
        let relevance = (normalized / 100.0).min(self.config.relevance_cap);

        CandidateScore {
            dimensions,
            earned,
            max_possible,
            normalized,
            relevance,
        }
    }

    fn score_dimension(
        &self,
        dimension: Dimension,
        requirement: &SearchRequirement,
        candidate: &CandidateProfile,
    ) -> Option<DimensionScore> {
        let (score, details) = match dimension {
            Dimension::Role => {
                let eval = score_role(requirement.role()?, candidate);
                (eval.score, eval.details)
            }
            Dimension::Experience => {
                let eval = score_experience(
                    requirement.experience()?,
                    candidate.total_experience.as_deref(),
                );
                (eval.score, eval.details)
            }
            Dimension::Location => {
                let eval = score_location(requirement.location()?, candidate.location.as_deref());
                (eval.score, eval.details)
            }
            Dimension::Skills => {
                let eval = score_skills(&requirement.skills(), candidate);
                (eval.score, eval.details)
            }
            Dimension::Education => {
                let eval = score_education(requirement.education()?, candidate);
                (eval.score, eval.details)
            }
            Dimension::Responsibility => {
                let eval = score_responsibilities(&requirement.responsibilities(), candidate);
                (eval.score, eval.details)
            }
        };

        let max = self.config.weights.for_dimension(dimension);
        Some(DimensionScore {
            dimension,
            score,
            status: self.config.statuses.for_dimension(dimension).classify(score),
            details,
            earned: score * max,
            max,
        })
    }
}
