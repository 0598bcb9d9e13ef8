use super::Evaluation;
use crate::CandidateProfile;
use crate::lexicon::RESPONSIBILITY_STOP_WORDS;
use crate::normalize::{normalize_text, tokenize};

/// Credit for a responsibility phrase found verbatim.
pub const PHRASE_HIT_WEIGHT: f64 = 1.5;
/// Share of a phrase's keywords that must appear for keyword credit.
pub const KEYWORD_COVERAGE_MIN: f64 = 0.6;
/// Denominator factor: a full score does not need every phrase verbatim.
pub const COVERAGE_FACTOR: f64 = 0.7;
const MIN_KEYWORD_LEN: usize = 4;

/// Resume, summary, current role, achievements and work/project descriptions
/// as one normalized haystack.
pub fn candidate_haystack(candidate: &CandidateProfile) -> String {
    let parts = [
        candidate.resume_text.as_deref(),
        candidate.summary.as_deref(),
        candidate.current_role.as_deref(),
    ]
    .into_iter()
    .flatten()
    .chain(candidate.key_achievements.iter().map(String::as_str))
    .chain(
        candidate
            .work_experience
            .iter()
            .filter_map(|work| work.description.as_deref()),
    )
    .chain(
        candidate
            .projects
            .iter()
            .filter_map(|project| project.description.as_deref()),
    )
    .filter(|part| !part.trim().is_empty())
    .collect::<Vec<_>>();

    normalize_text(&parts.join(" \n "))
}

fn keywords(phrase: &str) -> Vec<String> {
    tokenize(phrase)
        .into_iter()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|word| !RESPONSIBILITY_STOP_WORDS.contains(&word.as_str()))
        .collect()
}

/// Scores how much of the implied responsibility list the candidate's own
/// text evidences.
pub fn score_responsibilities(responsibilities: &[&str], candidate: &CandidateProfile) -> Evaluation {
    let haystack = candidate_haystack(candidate);
    if haystack.is_empty() {
        return Evaluation::new(0.0, "No resume or work history text to compare");
    }
    if responsibilities.is_empty() {
        return Evaluation::new(1.0, "No responsibilities required");
    }

    let mut total = 0.0;
    let mut verbatim = 0usize;
    let mut by_keyword = 0usize;

    for responsibility in responsibilities {
        let phrase = normalize_text(responsibility);
        if phrase.is_empty() {
            continue;
        }

        if haystack.contains(&phrase) {
            total += PHRASE_HIT_WEIGHT;
            verbatim += 1;
            continue;
        }

        let keywords = keywords(&phrase);
        if keywords.is_empty() {
            continue;
        }
        let found = keywords
            .iter()
            .filter(|keyword| haystack.contains(keyword.as_str()))
            .count();
        let ratio = found as f64 / keywords.len() as f64;
        if ratio >= KEYWORD_COVERAGE_MIN {
            total += ratio;
            by_keyword += 1;
        }
    }

    let score = (total / (responsibilities.len() as f64 * COVERAGE_FACTOR)).min(1.0);
    Evaluation::new(
        score,
        format!(
            "{} of {} responsibilities evidenced ({} verbatim, {} by keywords)",
            verbatim + by_keyword,
            responsibilities.len(),
            verbatim,
            by_keyword
        ),
    )
}
