use std::collections::HashSet;

use super::Evaluation;
use crate::CandidateProfile;
use crate::lexicon::skills::synonym_group;
use crate::normalize::{contains_term, mentions, normalize_text};

/// Score when the candidate has no skills recorded at all.
pub const NO_SKILLS_SCORE: f64 = 0.2;

/// Fraction of required skills the candidate covers, directly or through a
/// synonym. Duplicate requirements are counted once.
pub fn score_skills(required: &[&str], candidate: &CandidateProfile) -> Evaluation {
    let candidate_skills: Vec<String> = candidate.all_skills().map(normalize_text).collect();
    if candidate_skills.is_empty() {
        return Evaluation::new(NO_SKILLS_SCORE, "No skills on record");
    }

    let mut seen = HashSet::new();
    let required: Vec<String> = required
        .iter()
        .map(|skill| normalize_text(skill))
        .filter(|skill| !skill.is_empty() && seen.insert(skill.clone()))
        .collect();
    if required.is_empty() {
        return Evaluation::new(1.0, "No skills required");
    }

    let (matched, missing): (Vec<&String>, Vec<&String>) = required
        .iter()
        .partition(|skill| has_skill(&candidate_skills, skill));

    let score = matched.len() as f64 / required.len() as f64;
    let details = format!(
        "{} of {} skills matched (matched: {} / missing: {})",
        matched.len(),
        required.len(),
        join_or_none(&matched),
        join_or_none(&missing),
    );

    Evaluation::new(score, details)
}

fn has_skill(candidate_skills: &[String], required: &str) -> bool {
    // Short skills on either side ("c", "go", "erp") only count as whole words.
    if candidate_skills
        .iter()
        .any(|skill| mentions(skill, required) || mentions(required, skill))
    {
        return true;
    }

    synonym_group(required).is_some_and(|group| {
        candidate_skills
            .iter()
            .any(|skill| group.iter().any(|term| contains_term(skill, term)))
    })
}

fn join_or_none(skills: &[&String]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(technical: &[&str], soft: &[&str], tags: &[&str]) -> CandidateProfile {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        CandidateProfile {
            technical_skills: owned(technical),
            soft_skills: owned(soft),
            tags: owned(tags),
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn direct_hits_are_case_insensitive() {
        let eval = score_skills(&["SAP"], &candidate(&["sap", "Excel"], &[], &[]));
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn synonyms_count_in_both_directions() {
        let eval = score_skills(&["SAP"], &candidate(&["ERP"], &[], &[]));
        assert_eq!(eval.score, 1.0);

        let eval = score_skills(&["ERP"], &candidate(&["SAP MM"], &[], &[]));
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn soft_skills_and_tags_are_included() {
        let eval = score_skills(
            &["Leadership", "Fleet"],
            &candidate(&[], &["Team Leadership"], &["fleet ops"]),
        );
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn partial_coverage_is_a_ratio() {
        let eval = score_skills(
            &["SAP", "GST", "Forklift", "Tally"],
            &candidate(&["SAP", "Tally Prime"], &[], &[]),
        );
        assert_eq!(eval.score, 0.5);
        assert!(eval.details.contains("missing: gst, forklift"));
    }

    #[test]
    fn duplicates_in_requirement_are_tolerated() {
        let eval = score_skills(&["SAP", "sap", " SAP "], &candidate(&["SAP"], &[], &[]));
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn synonym_terms_need_whole_words() {
        let eval = score_skills(&["SAP"], &candidate(&[], &["Interpersonal Skills"], &[]));
        assert_eq!(eval.score, 0.0);

        let eval = score_skills(&["SAP"], &candidate(&["ERP Implementation"], &[], &[]));
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn short_required_skills_need_whole_words() {
        let eval = score_skills(&["C", "Go"], &candidate(&["Excel", "Google Sheets"], &[], &[]));
        assert_eq!(eval.score, 0.0);

        let eval = score_skills(&["C", "Go"], &candidate(&["C++", "Go lang"], &[], &[]));
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn no_recorded_skills_scores_low_regardless_of_requirement() {
        let eval = score_skills(&["SAP", "Excel", "GST"], &candidate(&[], &[], &[]));
        assert_eq!(eval.score, NO_SKILLS_SCORE);
    }
}
