use super::Evaluation;
use crate::CandidateProfile;
use crate::lexicon::education::EducationLevel;
use crate::normalize::{mutual_contains, normalize_text};

pub const MISSING_EDUCATION_SCORE: f64 = 0.3;

/// Scores the candidate's qualification against the required one, using the
/// education ladder when the texts do not match directly.
pub fn score_education(required: &str, candidate: &CandidateProfile) -> Evaluation {
    let required_norm = normalize_text(required);
    let candidate_texts: Vec<String> = [
        candidate.highest_qualification.as_deref(),
        candidate.degree.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(normalize_text)
    .filter(|text| !text.is_empty())
    .collect();

    if candidate_texts.is_empty() {
        return Evaluation::new(MISSING_EDUCATION_SCORE, "Education not on record");
    }

    if let Some(hit) = candidate_texts
        .iter()
        .find(|text| mutual_contains(text, &required_norm))
    {
        return Evaluation::new(1.0, format!("Qualification matches: {hit}"));
    }

    let candidate_level = candidate_texts
        .iter()
        .filter_map(|text| EducationLevel::resolve(text))
        .max();

    match (EducationLevel::resolve(&required_norm), candidate_level) {
        (Some(req), Some(cand)) if cand >= req => Evaluation::new(
            0.8,
            format!("{} meets the {} requirement", cand.as_ref(), req.as_ref()),
        ),
        (Some(req), Some(cand)) => Evaluation::new(
            0.4,
            format!("{} is below the {} requirement", cand.as_ref(), req.as_ref()),
        ),
        _ => Evaluation::new(
            0.2,
            format!("Could not compare {} with {}", candidate_texts.join(" / "), required_norm),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(qualification: Option<&str>, degree: Option<&str>) -> CandidateProfile {
        CandidateProfile {
            highest_qualification: qualification.map(str::to_string),
            degree: degree.map(str::to_string),
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn direct_text_match_scores_full() {
        let eval = score_education("MBA", &candidate(Some("MBA in Operations"), None));
        assert_eq!(eval.score, 1.0);

        let eval = score_education("B.Tech", &candidate(None, Some("b.tech")));
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn higher_level_on_the_ladder_scores_high() {
        let eval = score_education("Graduate", &candidate(Some("MBA"), None));
        assert_eq!(eval.score, 0.8);
    }

    #[test]
    fn lower_level_scores_partial() {
        let eval = score_education("Master's", &candidate(Some("Diploma in Logistics"), None));
        assert_eq!(eval.score, 0.4);
    }

    #[test]
    fn unresolvable_texts_score_low() {
        let eval = score_education("Chartered Accountant", &candidate(Some("ICWA"), None));
        assert_eq!(eval.score, 0.2);
    }

    #[test]
    fn missing_education_is_neutral() {
        assert_eq!(
            score_education("MBA", &candidate(None, Some("  "))).score,
            MISSING_EDUCATION_SCORE
        );
    }
}
