use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon::education::EDUCATION_KEYWORDS;
use crate::lexicon::geo::LOCATION_GAZETTEER;
use crate::lexicon::skills::{CERTIFICATION_KEYWORDS, SKILL_KEYWORDS};
use crate::lexicon::{INDUSTRY_KEYWORDS, roles};
use crate::normalize::{mentions, normalize_text, title_case};
use crate::{ExperienceRange, SearchRequirement};

lazy_static! {
    // "5+ years" / "5 + yrs"
    static ref PLUS_YEARS_RE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*\+\s*(?:years?|yrs?)\b").unwrap();
    // "3-5 years" / "3 to 5 yrs"
    static ref RANGE_YEARS_RE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*(?:-|–|to)\s*(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\b").unwrap();
    // "minimum 4 years" / "minimum of 4 yrs"
    static ref MINIMUM_YEARS_RE: Regex =
        Regex::new(r"\bmin(?:imum)?\.?\s+(?:of\s+)?(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\b").unwrap();
    // "at least 2 years"
    static ref AT_LEAST_YEARS_RE: Regex =
        Regex::new(r"\bat\s+least\s+(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\b").unwrap();
    // "6 years experience" with no qualifier
    static ref BARE_YEARS_RE: Regex =
        Regex::new(r"\b(\d+(?:\.\d+)?)\s*(?:years?|yrs?)\b").unwrap();

    // "₹8 LPA" / "Rs. 50,000" / "INR 6 lakh" / "8-10 LPA" / "12 lakhs CTC"
    static ref SALARY_RE: Regex = Regex::new(
        r"(?i)(?:₹|\brs\.?|\binr)\s*\d[\d,]*(?:\.\d+)?(?:\s*(?:-|to)\s*\d[\d,]*(?:\.\d+)?)?(?:\s*(?:lpa|lakhs?|lacs?|k|cr|crores?|per\s+month|/month|pm))?|\b\d+(?:\.\d+)?(?:\s*(?:-|to)\s*\d+(?:\.\d+)?)?\s*(?:lpa|lakhs?|lacs?|ctc)\b(?:\s*ctc\b)?"
    )
    .unwrap();
}

/// Rule-based extraction over fixed tables. Never fails; an unrecognised
/// query yields an empty requirement.
pub fn extract_requirement(query: &str) -> SearchRequirement {
    let text = normalize_text(query);

    let role_keyword = roles::role_keywords()
        .iter()
        .copied()
        .find(|keyword| text.contains(keyword));
    let implied_responsibilities = role_keyword
        .and_then(roles::canonical_role)
        .map(|canonical| {
            roles::responsibilities(canonical)
                .iter()
                .map(|r| r.to_string())
                .collect()
        })
        .unwrap_or_default();

    SearchRequirement {
        role: role_keyword.map(title_case),
        experience: extract_experience(&text),
        location: LOCATION_GAZETTEER
            .iter()
            .find(|place| mentions(&text, place))
            .map(|place| title_case(place)),
        skills: all_mentioned(&text, SKILL_KEYWORDS),
        education: EDUCATION_KEYWORDS
            .iter()
            .find(|(needle, _)| mentions(&text, needle))
            .map(|(_, display)| display.to_string()),
        certifications: all_mentioned(&text, CERTIFICATION_KEYWORDS),
        industry: INDUSTRY_KEYWORDS
            .iter()
            .find(|(needle, _)| mentions(&text, needle))
            .map(|(_, display)| display.to_string()),
        specific_requirements: extract_salary(query),
        implied_responsibilities,
    }
}

/// First matching pattern wins: "n+ years", "n-m years", "minimum n years",
/// "at least n years", then a bare "n years" as a minimum.
pub fn extract_experience(text: &str) -> Option<ExperienceRange> {
    let min_only = |value: f64| ExperienceRange {
        min: Some(value),
        ..ExperienceRange::default()
    };

    if let Some(caps) = PLUS_YEARS_RE.captures(text) {
        return caps[1].parse().ok().map(min_only);
    }
    if let Some(caps) = RANGE_YEARS_RE.captures(text) {
        let min: f64 = caps[1].parse().ok()?;
        let max: f64 = caps[2].parse().ok()?;
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        return Some(ExperienceRange {
            min: Some(min),
            max: Some(max),
            exact: None,
        });
    }
    for pattern in [&*MINIMUM_YEARS_RE, &*AT_LEAST_YEARS_RE, &*BARE_YEARS_RE] {
        if let Some(caps) = pattern.captures(text) {
            return caps[1].parse().ok().map(min_only);
        }
    }
    None
}

/// Salary hints, verbatim from the original query.
pub fn extract_salary(query: &str) -> Vec<String> {
    SALARY_RE
        .find_iter(query)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Every table hit in table order. A hit whose needle sits inside a longer
/// hit ("excel" in "advanced excel") is dropped, as are repeated display forms.
fn all_mentioned(text: &str, table: &[(&str, &str)]) -> Vec<String> {
    let hits: Vec<(&str, &str)> = table
        .iter()
        .copied()
        .filter(|(needle, _)| mentions(text, needle))
        .collect();

    let mut out: Vec<String> = Vec::new();
    for (needle, display) in &hits {
        let subsumed = hits
            .iter()
            .any(|(other, _)| other.len() > needle.len() && other.contains(needle));
        if !subsumed && !out.iter().any(|d| d == display) {
            out.push(display.to_string());
        }
    }
    out
}
