use serde::Deserialize;

use super::ExtractionError;
use crate::{ExperienceRange, SearchRequirement};

/// Builds the structured-extraction prompt for one recruiter query.
pub fn build_prompt(query: &str) -> String {
    format!(
        r#"Extract hiring criteria from the recruiter query below.

Return exactly one JSON object with these keys:
- "role": string or null (job title)
- "experience": null or {{"min": number|null, "max": number|null, "exact": number|null}} (years)
- "location": string or null
- "skills": array of strings
- "education": string or null
- "certifications": array of strings
- "industry": string or null
- "specificRequirements": array of strings (salary hints and other extras)
- "impliedResponsibilities": array of short phrases describing the daily tasks of the role

Use null or [] for anything the query does not mention. Do not invent criteria.

Query: {query}"#
    )
}

/// Reply shape. Types are checked strictly; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ReplyPayload {
    role: Option<String>,
    experience: Option<ExperienceRange>,
    location: Option<String>,
    skills: Vec<String>,
    education: Option<String>,
    certifications: Vec<String>,
    industry: Option<String>,
    specific_requirements: Vec<String>,
    implied_responsibilities: Vec<String>,
}

/// Cuts the first top-level JSON object out of a reply that may carry
/// markdown fences or prose around it.
pub fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in reply[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&reply[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Validates a model reply and turns it into a requirement.
pub fn parse_reply(reply: &str) -> Result<SearchRequirement, ExtractionError> {
    let json = extract_json_object(reply).ok_or(ExtractionError::NoJsonObject)?;
    let payload: ReplyPayload = serde_json::from_str(json)?;

    if let Some(range) = &payload.experience {
        validate_experience(range)?;
    }

    let requirement = SearchRequirement {
        role: payload.role,
        experience: payload.experience.filter(|range| !range.is_unconstrained()),
        location: payload.location,
        skills: payload.skills,
        education: payload.education,
        certifications: payload.certifications,
        industry: payload.industry,
        specific_requirements: payload.specific_requirements,
        implied_responsibilities: payload.implied_responsibilities,
    };

    if requirement.is_empty() {
        return Err(ExtractionError::NoSignal);
    }
    Ok(requirement)
}

fn validate_experience(range: &ExperienceRange) -> Result<(), ExtractionError> {
    let values = [range.min, range.max, range.exact];
    if values
        .iter()
        .flatten()
        .any(|v| !v.is_finite() || *v < 0.0)
    {
        return Err(ExtractionError::InvalidExperience(format!(
            "negative or non-finite years: {range:?}"
        )));
    }
    if let (Some(min), Some(max)) = (range.min, range.max) {
        if min > max {
            return Err(ExtractionError::InvalidExperience(format!(
                "min {min} exceeds max {max}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_query() {
        let prompt = build_prompt("Fleet Manager in Pune");
        assert!(prompt.contains("Query: Fleet Manager in Pune"));
        assert!(prompt.contains(r#""experience": null or {"min""#));
    }

    #[test]
    fn cuts_json_out_of_fenced_reply() {
        let reply = "Sure!\n```json\n{\"role\": \"Fleet Manager\", \"note\": \"a } brace\"}\n```";
        assert_eq!(
            extract_json_object(reply),
            Some("{\"role\": \"Fleet Manager\", \"note\": \"a } brace\"}")
        );
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("{\"unterminated\": 1"), None);
    }

    #[test]
    fn accepts_a_well_formed_reply() {
        let reply = r#"{
            "role": "Warehouse Manager",
            "experience": {"min": 3, "max": null, "exact": null},
            "location": "Mumbai",
            "skills": ["SAP"],
            "education": null,
            "certifications": [],
            "industry": "Logistics",
            "specificRequirements": ["8 LPA"],
            "impliedResponsibilities": ["manage warehouse operations"],
            "confidence": 0.9
        }"#;

        let requirement = parse_reply(reply).unwrap();
        assert_eq!(requirement.role.as_deref(), Some("Warehouse Manager"));
        assert_eq!(requirement.experience.unwrap().min, Some(3.0));
        assert_eq!(requirement.skills, vec!["SAP"]);
        assert_eq!(requirement.specific_requirements, vec!["8 LPA"]);
    }

    #[test]
    fn rejects_wrong_types() {
        let err = parse_reply(r#"{"role": "Driver", "skills": "driving"}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::Json(_)));
    }

    #[test]
    fn rejects_inverted_or_negative_experience() {
        let err = parse_reply(r#"{"role": "Driver", "experience": {"min": 5, "max": 2}}"#)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidExperience(_)));

        let err = parse_reply(r#"{"role": "Driver", "experience": {"min": -1}}"#).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidExperience(_)));
    }

    #[test]
    fn rejects_non_objects_and_empty_payloads() {
        assert!(matches!(
            parse_reply("[1, 2, 3]"),
            Err(ExtractionError::NoJsonObject)
        ));
        assert!(matches!(
            parse_reply(r#"{"role": null, "skills": []}"#),
            Err(ExtractionError::NoSignal)
        ));
    }
}
