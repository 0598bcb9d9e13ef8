use std::collections::HashSet;

use super::Evaluation;
use crate::lexicon::geo::clusters_mentioning;
use crate::normalize::{mutual_contains, normalize_text};

pub const SAME_LOCATION_SCORE: f64 = 1.0;
pub const SAME_CLUSTER_SCORE: f64 = 0.85;
/// Populated but unrelated locations keep a residual score so gazetteer gaps
/// never fully exclude a candidate.
pub const DISTANT_LOCATION_SCORE: f64 = 0.1;
pub const MISSING_LOCATION_SCORE: f64 = 0.3;

/// Scores location closeness. Symmetric in its two arguments whenever both
/// are populated.
pub fn score_location(required: &str, candidate: Option<&str>) -> Evaluation {
    let required_norm = normalize_text(required);
    let Some(candidate_norm) = candidate.map(normalize_text).filter(|c| !c.is_empty()) else {
        return Evaluation::new(MISSING_LOCATION_SCORE, "Candidate location unknown");
    };

    if mutual_contains(&required_norm, &candidate_norm) {
        return Evaluation::new(
            SAME_LOCATION_SCORE,
            format!("Located in {candidate_norm}"),
        );
    }

    let required_clusters: HashSet<usize> = clusters_mentioning(&required_norm).collect();
    if clusters_mentioning(&candidate_norm).any(|index| required_clusters.contains(&index)) {
        return Evaluation::new(
            SAME_CLUSTER_SCORE,
            format!("{candidate_norm} is in the same metro area as {required_norm}"),
        );
    }

    Evaluation::new(
        DISTANT_LOCATION_SCORE,
        format!("{candidate_norm} is outside {required_norm}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_and_contained_locations_match() {
        assert_eq!(score_location("Mumbai", Some("mumbai")).score, SAME_LOCATION_SCORE);
        assert_eq!(
            score_location("Mumbai", Some("Navi Mumbai")).score,
            SAME_LOCATION_SCORE
        );
        assert_eq!(
            score_location("Gurgaon, Haryana", Some(" gurgaon ")).score,
            SAME_LOCATION_SCORE
        );
    }

    #[test]
    fn cluster_members_score_symmetrically() {
        let forward = score_location("Gurgaon", Some("Noida")).score;
        let backward = score_location("Noida", Some("Gurgaon")).score;

        assert_eq!(forward, SAME_CLUSTER_SCORE);
        assert_eq!(forward, backward);

        assert_eq!(score_location("Thane", Some("Panvel")).score, SAME_CLUSTER_SCORE);
        assert_eq!(score_location("Bengaluru", Some("Bangalore")).score, SAME_CLUSTER_SCORE);
    }

    #[test]
    fn different_metros_keep_residual_score() {
        let eval = score_location("Mumbai", Some("Chennai"));
        assert_eq!(eval.score, DISTANT_LOCATION_SCORE);
        assert!(eval.details.contains("outside"));
    }

    #[test]
    fn neighbourhood_names_do_not_borrow_another_metro() {
        let eval = score_location("Thane", Some("Kalyani Nagar, Pune"));
        assert_eq!(eval.score, DISTANT_LOCATION_SCORE);

        assert_eq!(score_location("Thane", Some("Kalyan")).score, SAME_CLUSTER_SCORE);
    }

    #[test]
    fn unknown_places_keep_residual_score() {
        assert_eq!(score_location("Shimla", Some("Manali")).score, DISTANT_LOCATION_SCORE);
    }

    #[test]
    fn missing_candidate_location_is_neutral() {
        assert_eq!(score_location("Pune", None).score, MISSING_LOCATION_SCORE);
        assert_eq!(score_location("Pune", Some("   ")).score, MISSING_LOCATION_SCORE);
    }
}
