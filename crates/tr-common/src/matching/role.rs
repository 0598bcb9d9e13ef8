use crate::CandidateProfile;
use crate::lexicon::roles;
use crate::normalize::{depluralize, mutual_contains, normalize_text};

pub const EXACT_ROLE_SCORE: f64 = 1.0;
pub const SYNONYM_ROLE_SCORE: f64 = 0.8;
pub const SKILL_INFERRED_ROLE_SCORE: f64 = 0.4;
/// Indicative skills needed before a role is inferred from skills alone.
pub const MIN_INDICATIVE_SKILLS: usize = 2;

/// Which tier of the cascade produced the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTier {
    Exact,
    Synonym,
    SkillInference,
    NoMatch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleEvaluation {
    pub score: f64,
    pub tier: RoleTier,
    pub details: String,
}

/// Both sides of the comparison in raw and depluralized form.
struct RoleForms {
    required: String,
    required_singular: String,
    candidate: Option<(String, String)>,
}

type Tier = fn(&RoleForms, &CandidateProfile) -> Option<RoleEvaluation>;

/// Tiers in strictly decreasing confidence; the first hit wins.
const TIERS: &[Tier] = &[exact_tier, synonym_tier, skill_inference_tier];

/// Scores how close the candidate's current (or desired) role is to `required`.
pub fn score_role(required: &str, candidate: &CandidateProfile) -> RoleEvaluation {
    let forms = RoleForms {
        required: normalize_text(required),
        required_singular: depluralize(required),
        candidate: candidate
            .role()
            .map(|role| (normalize_text(role), depluralize(role))),
    };

    TIERS
        .iter()
        .find_map(|tier| tier(&forms, candidate))
        .unwrap_or_else(|| RoleEvaluation {
            score: 0.0,
            tier: RoleTier::NoMatch,
            details: match candidate.role() {
                Some(role) => format!("{role} is unrelated to {required}"),
                None => format!("No role on record to compare with {required}"),
            },
        })
}

fn exact_tier(forms: &RoleForms, _candidate: &CandidateProfile) -> Option<RoleEvaluation> {
    let (candidate_raw, candidate_singular) = forms.candidate.as_ref()?;

    let hit = mutual_contains(&forms.required, candidate_raw)
        || mutual_contains(&forms.required_singular, candidate_singular);

    hit.then(|| RoleEvaluation {
        score: EXACT_ROLE_SCORE,
        tier: RoleTier::Exact,
        details: format!("Role matches: {candidate_raw}"),
    })
}

fn synonym_tier(forms: &RoleForms, _candidate: &CandidateProfile) -> Option<RoleEvaluation> {
    let (candidate_raw, candidate_singular) = forms.candidate.as_ref()?;
    let canonical = roles::canonical_key(&forms.required, &forms.required_singular)?;

    roles::synonyms(canonical)
        .iter()
        .find(|synonym| {
            candidate_raw.contains(*synonym) || candidate_singular.contains(&depluralize(synonym))
        })
        .map(|synonym| RoleEvaluation {
            score: SYNONYM_ROLE_SCORE,
            tier: RoleTier::Synonym,
            details: format!("{candidate_raw} is an equivalent title ({synonym})"),
        })
}

fn skill_inference_tier(forms: &RoleForms, candidate: &CandidateProfile) -> Option<RoleEvaluation> {
    let canonical = roles::canonical_key(&forms.required, &forms.required_singular)?;
    let skills = candidate
        .all_skills()
        .map(normalize_text)
        .collect::<Vec<_>>()
        .join(" | ");
    if skills.is_empty() {
        return None;
    }

    let present: Vec<&str> = roles::skill_indicators(canonical)
        .iter()
        .copied()
        .filter(|indicator| skills.contains(indicator))
        .collect();

    (present.len() >= MIN_INDICATIVE_SKILLS).then(|| RoleEvaluation {
        score: SKILL_INFERRED_ROLE_SCORE,
        tier: RoleTier::SkillInference,
        details: format!("Skills suggest {canonical} experience: {}", present.join(", ")),
    })
}
