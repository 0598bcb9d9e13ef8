/// Outcome of one hard-filter check.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// Candidate stays in the ranking.
    Pass,
    /// Candidate is dropped regardless of its aggregate score.
    Excluded { reason: String },
}

impl GateDecision {
    pub fn is_excluded(&self) -> bool {
        matches!(self, GateDecision::Excluded { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            GateDecision::Excluded { reason } => Some(reason),
            GateDecision::Pass => None,
        }
    }
}

/// Thresholds the gate enforces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateThresholds {
    /// Minimum relevance (0.0〜0.99 scale) to survive.
    pub min_relevance: f64,
    /// Minimum raw role score when role is an active dimension.
    pub role_gate: f64,
}

/// Every check's decision for one candidate (check name, decision).
#[derive(Debug, Clone, PartialEq)]
pub struct GateResult {
    pub decisions: Vec<(&'static str, GateDecision)>,
}

impl GateResult {
    pub fn is_excluded(&self) -> bool {
        self.decisions.iter().any(|(_, d)| d.is_excluded())
    }

    /// Exclusion reasons joined with `; `, or `None` when every check passed.
    pub fn reasons(&self) -> Option<String> {
        let reasons: Vec<_> = self
            .decisions
            .iter()
            .filter_map(|(name, d)| d.reason().map(|r| format!("[{name}] {r}")))
            .collect();

        if reasons.is_empty() {
            None
        } else {
            Some(reasons.join("; "))
        }
    }
}

/// Relevance floor.
pub fn check_relevance(relevance: f64, thresholds: &GateThresholds) -> GateDecision {
    if relevance < thresholds.min_relevance {
        GateDecision::Excluded {
            reason: format!(
                "relevance {:.2} below {:.2}",
                relevance, thresholds.min_relevance
            ),
        }
    } else {
        GateDecision::Pass
    }
}

/// Role gate. `None` means role was not part of the requirement.
pub fn check_role(role_score: Option<f64>, thresholds: &GateThresholds) -> GateDecision {
    match role_score {
        Some(score) if score < thresholds.role_gate => GateDecision::Excluded {
            reason: format!("role score {:.2} below {:.2}", score, thresholds.role_gate),
        },
        _ => GateDecision::Pass,
    }
}

/// Runs both hard-filter checks; neither short-circuits the other.
pub fn run_gate_checks(
    relevance: f64,
    role_score: Option<f64>,
    thresholds: &GateThresholds,
) -> GateResult {
    GateResult {
        decisions: vec![
            ("relevance", check_relevance(relevance, thresholds)),
            ("role", check_role(role_score, thresholds)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: GateThresholds = GateThresholds {
        min_relevance: 0.5,
        role_gate: 0.3,
    };

    #[test]
    fn relevance_floor_is_inclusive() {
        assert_eq!(check_relevance(0.5, &THRESHOLDS), GateDecision::Pass);
        assert!(check_relevance(0.49, &THRESHOLDS).is_excluded());
    }

    #[test]
    fn role_gate_only_applies_when_role_is_active() {
        assert_eq!(check_role(None, &THRESHOLDS), GateDecision::Pass);
        assert_eq!(check_role(Some(0.3), &THRESHOLDS), GateDecision::Pass);
        assert!(check_role(Some(0.0), &THRESHOLDS).is_excluded());
    }

    #[test]
    fn weak_role_excludes_even_with_high_relevance() {
        let result = run_gate_checks(0.9, Some(0.0), &THRESHOLDS);

        assert!(result.is_excluded());
        let reasons = result.reasons().unwrap();
        assert!(reasons.contains("[role]"));
        assert!(!reasons.contains("[relevance]"));
    }

    #[test]
    fn passing_candidate_has_no_reasons() {
        let result = run_gate_checks(0.75, Some(0.8), &THRESHOLDS);
        assert!(!result.is_excluded());
        assert_eq!(result.reasons(), None);
        assert_eq!(result.decisions.len(), 2);
    }
}
