use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::extraction::parser::ExtractionMethod;
use crate::matching::dimension::Dimension;
use crate::{CandidateProfile, SearchRequirement};

/// Per-dimension verdict, judged on the raw [0,1] score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchStatus {
    Match,
    Partial,
    Miss,
}

/// Explanation for one active dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    pub category: Dimension,
    pub status: MatchStatus,
    /// Raw matcher score (0.0〜1.0)
    pub score: f64,
    pub message: String,
    /// Weighted points earned (`score * max_weight`)
    pub weight: f64,
    /// Weight-table entry for this dimension
    pub max_weight: f64,
}

/// Earned vs available points for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreShare {
    pub earned: f64,
    pub max: f64,
    pub percentage: u32,
}

impl ScoreShare {
    pub fn new(earned: f64, max: f64) -> Self {
        let percentage = if max > 0.0 {
            (earned / max * 100.0).round().clamp(0.0, 100.0) as u32
        } else {
            0
        };
        Self {
            earned,
            max,
            percentage,
        }
    }
}

/// A candidate that survived the hard filter, with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: CandidateProfile,
    /// 0.0〜0.99
    pub relevance_score: f64,
    /// `round(relevance_score * 100)`
    pub match_percentage: u32,
    pub match_details: Vec<MatchDetail>,
    pub score_breakdown: BTreeMap<Dimension, ScoreShare>,
    /// Labels of the dimensions that missed.
    pub gap_analysis: Vec<String>,
}

impl ScoredCandidate {
    pub fn detail(&self, dimension: Dimension) -> Option<&MatchDetail> {
        self.match_details
            .iter()
            .find(|detail| detail.category == dimension)
    }

    pub fn status(&self, dimension: Dimension) -> Option<MatchStatus> {
        self.detail(dimension).map(|detail| detail.status)
    }
}

/// Envelope printed by the search binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub requirement: SearchRequirement,
    pub extraction_method: ExtractionMethod,
    pub evaluated_candidates: usize,
    pub returned_candidates: usize,
    pub results: Vec<ScoredCandidate>,
    pub ranked_at: DateTime<Utc>,
}

impl SearchResponse {
    pub fn new(
        query: impl Into<String>,
        requirement: SearchRequirement,
        extraction_method: ExtractionMethod,
        evaluated_candidates: usize,
        results: Vec<ScoredCandidate>,
        ranked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            query: query.into(),
            requirement,
            extraction_method,
            evaluated_candidates,
            returned_candidates: results.len(),
            results,
            ranked_at,
        }
    }
}
