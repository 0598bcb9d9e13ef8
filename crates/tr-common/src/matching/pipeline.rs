use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    gate::{GateResult, run_gate_checks},
    scoring::{CandidateScore, CandidateScorer, RankingConfig},
};
use crate::api::search_response::ScoredCandidate;
use crate::{CandidateProfile, SearchRequirement};

/// Scores a candidate pool against one requirement, drops what the gate
/// rejects and orders the rest by relevance.
///
/// Stateless between calls: the same requirement and pool always produce the
/// same ranking.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    scorer: CandidateScorer,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}

impl RankingEngine {
    pub fn new(config: RankingConfig) -> Self {
        Self {
            scorer: CandidateScorer::new(config),
        }
    }

    pub fn config(&self) -> &RankingConfig {
        self.scorer.config()
    }

    /// Scores one candidate without gating it.
    pub fn score(&self, requirement: &SearchRequirement, candidate: &CandidateProfile) -> CandidateScore {
        self.scorer.score(requirement, candidate)
    }

    /// Scores and gates one candidate.
    pub fn evaluate(
        &self,
        requirement: &SearchRequirement,
        candidate: &CandidateProfile,
    ) -> (CandidateScore, GateResult) {
        let score = self.scorer.score(requirement, candidate);
        let gate = run_gate_checks(
            score.relevance,
            score.role_score(),
            &self.config().gate_thresholds(),
        );
        (score, gate)
    }

    /// Ranked survivors, best first. Ties keep input order.
    ///
    /// A requirement with no active dimension yields an empty list.
    pub fn rank(
        &self,
        requirement: &SearchRequirement,
        candidates: &[CandidateProfile],
    ) -> Vec<ScoredCandidate> {
        if requirement.is_empty() {
            info!(
                candidates = candidates.len(),
                "requirement carries no scoreable signal; nothing to rank"
            );
            return Vec::new();
        }

        // Scoring is pure per candidate; the gate and the sort below stay sequential.
        let scores: Vec<CandidateScore> = if candidates.len() >= self.config().parallel_threshold {
            candidates
                .par_iter()
                .map(|candidate| self.scorer.score(requirement, candidate))
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| self.scorer.score(requirement, candidate))
                .collect()
        };

        let thresholds = self.config().gate_thresholds();
        let mut ranked = Vec::with_capacity(candidates.len());
        let mut excluded = 0usize;

        for (candidate, score) in candidates.iter().zip(scores) {
            let gate = run_gate_checks(score.relevance, score.role_score(), &thresholds);
            if let Some(reasons) = gate.reasons() {
                excluded += 1;
                debug!(
                    candidate_id = candidate.id.as_deref().unwrap_or("-"),
                    name = candidate.name.as_deref().unwrap_or("-"),
                    relevance = score.relevance,
                    %reasons,
                    "candidate excluded"
                );
                continue;
            }
            ranked.push(build_scored_candidate(candidate, &score));
        }

        ranked.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });

        info!(
            evaluated = candidates.len(),
            returned = ranked.len(),
            excluded,
            top_relevance = ranked.first().map(|c| c.relevance_score).unwrap_or(0.0),
            "ranking complete"
        );

        ranked
    }
}

fn build_scored_candidate(candidate: &CandidateProfile, score: &CandidateScore) -> ScoredCandidate {
    ScoredCandidate {
        candidate: candidate.clone(),
        relevance_score: score.relevance,
        match_percentage: score.match_percentage(),
        match_details: score.match_details(),
        score_breakdown: score.score_breakdown(),
        gap_analysis: score.gap_analysis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExperienceRange;

    fn requirement() -> SearchRequirement {
        SearchRequirement {
            role: Some("Fleet Manager".into()),
            location: Some("Gurgaon".into()),
            skills: vec!["GPS".into(), "SAP".into()],
            ..SearchRequirement::default()
        }
    }

    fn candidate(id: &str, role: &str, location: &str, skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            id: Some(id.into()),
            current_role: Some(role.into()),
            location: Some(location.into()),
            technical_skills: skills.iter().map(|s| s.to_string()).collect(),
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn sorts_descending_and_drops_gated_candidates() {
        let engine = RankingEngine::default();
        let pool = vec![
            candidate("partial", "Transport Supervisor", "Noida", &["GPS"]),
            candidate("best", "Fleet Manager", "Gurgaon", &["GPS", "SAP"]),
            candidate("off-role", "Software Engineer", "Gurgaon", &["GPS", "SAP"]),
        ];

        let ranked = engine.rank(&requirement(), &pool);
        let ids: Vec<_> = ranked
            .iter()
            .map(|c| c.candidate.id.as_deref().unwrap())
            .collect();

        assert_eq!(ids.first(), Some(&"best"));
        assert!(!ids.contains(&"off-role"));
        assert!(
            ranked
                .windows(2)
                .all(|w| w[0].relevance_score >= w[1].relevance_score)
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let engine = RankingEngine::default();
        let pool = vec![
            candidate("first", "Fleet Manager", "Gurgaon", &["GPS", "SAP"]),
            candidate("second", "Fleet Manager", "Gurgaon", &["GPS", "SAP"]),
            candidate("third", "Fleet Manager", "Gurgaon", &["GPS", "SAP"]),
        ];

        let ranked = engine.rank(&requirement(), &pool);
        let ids: Vec<_> = ranked
            .iter()
            .map(|c| c.candidate.id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_requirement_returns_nothing() {
        let engine = RankingEngine::default();
        let pool = vec![candidate("a", "Fleet Manager", "Gurgaon", &["GPS"])];

        assert!(engine.rank(&SearchRequirement::default(), &pool).is_empty());
    }

    #[test]
    fn parallel_and_sequential_paths_agree() {
        let pool: Vec<_> = (0..40)
            .map(|i| {
                let role = if i % 3 == 0 { "Fleet Manager" } else { "Fleet Supervisor" };
                let location = if i % 2 == 0 { "Gurgaon" } else { "Noida" };
                candidate(&i.to_string(), role, location, &["GPS"])
            })
            .collect();

        let sequential = RankingEngine::new(RankingConfig {
            parallel_threshold: usize::MAX,
            ..RankingConfig::default()
        });
        let parallel = RankingEngine::new(RankingConfig {
            parallel_threshold: 1,
            ..RankingConfig::default()
        });

        assert_eq!(
            sequential.rank(&requirement(), &pool),
            parallel.rank(&requirement(), &pool)
        );
    }

    #[test]
    fn evaluate_exposes_gate_reasons() {
        let engine = RankingEngine::default();
        let requirement = SearchRequirement {
            role: Some("Fleet Manager".into()),
            experience: Some(ExperienceRange {
                min: Some(2.0),
                ..ExperienceRange::default()
            }),
            ..SearchRequirement::default()
        };
        let mut profile = candidate("x", "Software Engineer", "Pune", &[]);
        profile.total_experience = Some("6 years".into());

        let (score, gate) = engine.evaluate(&requirement, &profile);
        assert_eq!(score.role_score(), Some(0.0));
        assert!(gate.is_excluded());
        assert!(gate.reasons().unwrap().contains("[role]"));
    }

    #[test]
    fn lower_relevance_floor_admits_more() {
        let pool = vec![candidate("weak", "Transport Supervisor", "Chennai", &[])];

        assert!(RankingEngine::default().rank(&requirement(), &pool).is_empty());

        let lenient = RankingEngine::new(RankingConfig {
            min_relevance: 0.0,
            ..RankingConfig::default()
        });
        assert_eq!(lenient.rank(&requirement(), &pool).len(), 1);
    }
}
