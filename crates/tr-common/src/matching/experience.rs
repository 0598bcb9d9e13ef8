use lazy_static::lazy_static;
use regex::Regex;

use super::Evaluation;
use crate::ExperienceRange;
use crate::normalize::normalize_text;

/// Score when the candidate's experience text has no recognisable number.
pub const UNPARSEABLE_EXPERIENCE_SCORE: f64 = 0.3;

lazy_static! {
    // "4 years 6 months" / "4 yrs, 6 months" / "4.5 years and 2 months"
    static ref YEARS_MONTHS_RE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)\b\D*?(\d+)\s*(?:months?|mos?)\b").unwrap();
    // "18 months"
    static ref MONTHS_RE: Regex = Regex::new(r"(\d+(?:\.\d+)?)\s*(?:months?|mos?)\b").unwrap();
    // "5 years" / "5+ yrs" / "3 yr"
    static ref YEARS_RE: Regex = Regex::new(r"(\d+(?:\.\d+)?)\s*\+?\s*(?:years?|yrs?)\b").unwrap();
    static ref YEAR_TOKEN_RE: Regex = Regex::new(r"\b(?:years?|yrs?)\b").unwrap();
}

/// Parses free-text experience into years.
///
/// Tried in order: "N years M months", "N months" (only when no year token is
/// present), "N years" / "N yr". Returns `None` when nothing numeric matches.
pub fn parse_experience_years(text: &str) -> Option<f64> {
    let text = normalize_text(text);
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = YEARS_MONTHS_RE.captures(&text) {
        let years: f64 = caps.get(1)?.as_str().parse().ok()?;
        let months: f64 = caps.get(2)?.as_str().parse().ok()?;
        return Some(years + months / 12.0);
    }

    if !YEAR_TOKEN_RE.is_match(&text) {
        if let Some(caps) = MONTHS_RE.captures(&text) {
            let months: f64 = caps.get(1)?.as_str().parse().ok()?;
            return Some(months / 12.0);
        }
    }

    let caps = YEARS_RE.captures(&text)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Scores the candidate's experience text against the requirement bounds.
pub fn score_experience(required: &ExperienceRange, candidate_text: Option<&str>) -> Evaluation {
    let Some(years) = candidate_text.and_then(parse_experience_years) else {
        return Evaluation::new(
            UNPARSEABLE_EXPERIENCE_SCORE,
            "Experience not stated in a recognisable form",
        );
    };

    if let Some(exact) = required.exact {
        return if (years - exact).abs() <= 1.0 {
            Evaluation::new(1.0, format!("{years:.1} years, within a year of {exact:.0}"))
        } else {
            Evaluation::new(0.3, format!("{years:.1} years, requirement is {exact:.0}"))
        };
    }

    if let Some(min) = required.min {
        return match required.max {
            _ if years < min => score_below_minimum(years, min),
            Some(max) if years > max => Evaluation::new(
                0.8,
                format!("{years:.1} years, above the {min:.0}-{max:.0} range"),
            ),
            Some(max) => Evaluation::new(
                1.0,
                format!("{years:.1} years, within {min:.0}-{max:.0}"),
            ),
            None => Evaluation::new(1.0, format!("{years:.1} years, meets {min:.0}+")),
        };
    }

    if years > 0.0 {
        Evaluation::new(0.5, format!("{years:.1} years of experience"))
    } else {
        Evaluation::new(0.2, "No experience recorded")
    }
}

/// Shortfalls of up to a year keep partial credit.
fn score_below_minimum(years: f64, min: f64) -> Evaluation {
    if min - years <= 1.0 {
        Evaluation::new(
            0.5,
            format!("{years:.1} years, just under the {min:.0} year minimum"),
        )
    } else {
        Evaluation::new(
            0.2,
            format!("{years:.1} years, below the {min:.0} year minimum"),
        )
    }
}
