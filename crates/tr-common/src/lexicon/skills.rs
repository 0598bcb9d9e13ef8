use std::collections::HashMap;
use std::sync::LazyLock;

/// Skill synonym groups. Membership is bidirectional: any term in a group
/// stands in for every other term of the same group.
const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "sap",
        &[
            "erp",
            "enterprise resource planning",
            "sap mm",
            "sap sd",
            "sap fico",
            "sap s/4hana",
            "s4 hana",
        ],
    ),
    ("tally", &["tally erp", "tally erp 9", "tally prime"]),
    (
        "excel",
        &["ms excel", "microsoft excel", "advanced excel", "spreadsheets"],
    ),
    ("ms office", &["microsoft office", "ms-office", "office 365"]),
    (
        "gps tracking",
        &["gps", "vehicle tracking", "telematics", "fleet tracking"],
    ),
    (
        "wms",
        &["warehouse management system", "warehouse management"],
    ),
    (
        "inventory management",
        &[
            "inventory control",
            "stock management",
            "stock control",
            "inventory planning",
        ],
    ),
    (
        "route planning",
        &["route optimization", "route optimisation", "trip planning"],
    ),
    (
        "vehicle maintenance",
        &["fleet maintenance", "preventive maintenance", "vehicle servicing"],
    ),
    (
        "crm",
        &[
            "customer relationship management",
            "salesforce",
            "zoho crm",
            "hubspot",
        ],
    ),
    ("power bi", &["powerbi", "power-bi"]),
    ("sql", &["mysql", "postgresql", "ms sql", "sql server", "oracle sql"]),
    ("gst", &["goods and services tax", "gst filing", "gst returns"]),
    ("six sigma", &["lean six sigma", "6 sigma"]),
    ("logistics", &["supply chain", "scm", "supply chain management"]),
    (
        "driving",
        &["driving license", "driving licence", "lmv", "hmv", "commercial driving"],
    ),
    (
        "communication",
        &[
            "communication skills",
            "verbal communication",
            "written communication",
        ],
    ),
    (
        "leadership",
        &["team leadership", "team management", "people management", "team handling"],
    ),
    ("negotiation", &["vendor negotiation", "negotiation skills"]),
    (
        "procurement",
        &["purchasing", "purchase", "sourcing", "strategic sourcing"],
    ),
    ("recruitment", &["talent acquisition", "hiring", "sourcing candidates"]),
    ("payroll", &["payroll processing", "salary processing"]),
    ("javascript", &["ecmascript", "node.js", "nodejs"]),
    ("python", &["python3", "python 3"]),
];

/// Any synonym term -> index of its group in `SKILL_SYNONYMS`.
static TERM_TO_GROUP: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (index, (canonical, synonyms)) in SKILL_SYNONYMS.iter().enumerate() {
        map.insert(*canonical, index);
        for synonym in *synonyms {
            map.entry(*synonym).or_insert(index);
        }
    }
    map
});

/// All terms equivalent to `skill` (canonical first), or `None` when the
/// skill has no synonym group. Expects the normalized form.
pub fn synonym_group(skill: &str) -> Option<Vec<&'static str>> {
    let index = *TERM_TO_GROUP.get(skill)?;
    let (canonical, synonyms) = SKILL_SYNONYMS[index];
    let mut group = Vec::with_capacity(synonyms.len() + 1);
    group.push(canonical);
    group.extend_from_slice(synonyms);
    Some(group)
}

/// Skill keywords recognised in free-text queries: (needle, display form).
/// Every hit is kept; a needle already covered by a longer hit is skipped.
pub const SKILL_KEYWORDS: &[(&str, &str)] = &[
    ("sap", "SAP"),
    ("erp", "ERP"),
    ("tally", "Tally"),
    ("advanced excel", "Advanced Excel"),
    ("excel", "Excel"),
    ("ms office", "MS Office"),
    ("gps", "GPS"),
    ("telematics", "Telematics"),
    ("wms", "WMS"),
    ("inventory management", "Inventory Management"),
    ("fleet management", "Fleet Management"),
    ("route planning", "Route Planning"),
    ("vehicle maintenance", "Vehicle Maintenance"),
    ("gst", "GST"),
    ("power bi", "Power BI"),
    ("sql", "SQL"),
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("java", "Java"),
    ("crm", "CRM"),
    ("salesforce", "Salesforce"),
    ("communication", "Communication"),
    ("leadership", "Leadership"),
    ("negotiation", "Negotiation"),
    ("six sigma", "Six Sigma"),
    ("forklift", "Forklift"),
    ("procurement", "Procurement"),
    ("vendor management", "Vendor Management"),
    ("payroll", "Payroll"),
    ("recruitment", "Recruitment"),
    ("customer service", "Customer Service"),
    ("dispatch", "Dispatch"),
    ("cold chain", "Cold Chain"),
];

/// Certification keywords recognised in free-text queries.
pub const CERTIFICATION_KEYWORDS: &[(&str, &str)] = &[
    ("pmp", "PMP"),
    ("six sigma green belt", "Six Sigma Green Belt"),
    ("six sigma black belt", "Six Sigma Black Belt"),
    ("green belt", "Six Sigma Green Belt"),
    ("black belt", "Six Sigma Black Belt"),
    ("cscp", "CSCP"),
    ("cpim", "CPIM"),
    ("apics", "APICS"),
    ("cips", "CIPS"),
    ("chartered accountant", "Chartered Accountant"),
    ("iso 9001", "ISO 9001"),
    ("nebosh", "NEBOSH"),
    ("iosh", "IOSH"),
    ("aws certified", "AWS Certified"),
    ("hazmat", "HAZMAT"),
    ("commercial driving license", "Commercial Driving License"),
    ("forklift certification", "Forklift Certification"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonym_groups_are_bidirectional() {
        let from_canonical = synonym_group("sap").unwrap();
        let from_synonym = synonym_group("erp").unwrap();

        assert_eq!(from_canonical, from_synonym);
        assert_eq!(from_canonical[0], "sap");
        assert!(from_canonical.contains(&"enterprise resource planning"));
    }

    #[test]
    fn unknown_skill_has_no_group() {
        assert!(synonym_group("underwater welding").is_none());
    }

    #[test]
    fn keyword_tables_are_lowercase() {
        for (needle, _) in SKILL_KEYWORDS.iter().chain(CERTIFICATION_KEYWORDS) {
            assert_eq!(*needle, needle.to_lowercase());
        }
    }
}
