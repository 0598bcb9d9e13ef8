use std::collections::HashMap;
use std::sync::LazyLock;

use crate::normalize::depluralize;

/// Canonical role -> titles accepted as the same job.
const ROLE_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "fleet manager",
        &[
            "fleet supervisor",
            "fleet executive",
            "fleet coordinator",
            "fleet operations manager",
            "transport manager",
            "transport supervisor",
            "vehicle manager",
        ],
    ),
    (
        "warehouse manager",
        &[
            "warehouse executive",
            "warehouse supervisor",
            "warehouse in-charge",
            "warehouse incharge",
            "store manager",
            "stores manager",
            "godown manager",
            "inventory manager",
            "storekeeper",
            "store keeper",
        ],
    ),
    (
        "logistics manager",
        &[
            "logistics executive",
            "logistics coordinator",
            "supply chain manager",
            "distribution manager",
            "shipping manager",
            "transport manager",
        ],
    ),
    (
        "operations manager",
        &[
            "operations executive",
            "operations head",
            "operations lead",
            "operations supervisor",
            "ops manager",
            "site manager",
            "branch operations manager",
        ],
    ),
    (
        "supply chain manager",
        &[
            "scm manager",
            "supply chain executive",
            "logistics manager",
            "procurement manager",
            "demand planner",
            "supply planning manager",
        ],
    ),
    (
        "procurement manager",
        &[
            "purchase manager",
            "purchase executive",
            "procurement executive",
            "purchasing manager",
            "sourcing manager",
            "buyer",
        ],
    ),
    (
        "accountant",
        &[
            "accounts executive",
            "accounts manager",
            "accounts officer",
            "finance executive",
            "bookkeeper",
            "tally operator",
        ],
    ),
    (
        "sales manager",
        &[
            "sales executive",
            "area sales manager",
            "regional sales manager",
            "territory manager",
            "key account manager",
            "business development manager",
        ],
    ),
    (
        "hr manager",
        &[
            "hr executive",
            "hr generalist",
            "hrbp",
            "human resources manager",
            "talent acquisition",
            "recruiter",
        ],
    ),
    (
        "software engineer",
        &[
            "software developer",
            "sde",
            "programmer",
            "backend engineer",
            "frontend engineer",
            "full stack developer",
        ],
    ),
    (
        "driver",
        &["delivery driver", "truck driver", "heavy vehicle driver", "chauffeur"],
    ),
    (
        "delivery executive",
        &[
            "delivery associate",
            "delivery partner",
            "delivery boy",
            "courier",
            "rider",
        ],
    ),
    (
        "customer service executive",
        &[
            "customer support executive",
            "customer care executive",
            "customer service representative",
            "call center executive",
            "telecaller",
        ],
    ),
    (
        "data analyst",
        &[
            "business analyst",
            "mis executive",
            "mis analyst",
            "reporting analyst",
            "analytics executive",
        ],
    ),
    (
        "quality manager",
        &[
            "qa manager",
            "qc manager",
            "quality assurance manager",
            "quality control manager",
            "quality engineer",
        ],
    ),
    (
        "production manager",
        &[
            "plant manager",
            "manufacturing manager",
            "production supervisor",
            "production engineer",
            "shift incharge",
        ],
    ),
];

/// Canonical role -> skills that usually indicate someone doing this job.
const ROLE_SKILL_INDICATORS: &[(&str, &[&str])] = &[
    (
        "fleet manager",
        &[
            "fleet management",
            "gps",
            "telematics",
            "vehicle maintenance",
            "route planning",
            "fuel management",
            "transport management",
            "driver management",
        ],
    ),
    (
        "warehouse manager",
        &[
            "inventory",
            "warehouse management",
            "wms",
            "stock control",
            "dispatch",
            "material handling",
            "forklift",
            "fifo",
        ],
    ),
    (
        "logistics manager",
        &[
            "logistics",
            "supply chain",
            "freight",
            "shipment",
            "route planning",
            "3pl",
            "customs clearance",
            "distribution",
        ],
    ),
    (
        "operations manager",
        &[
            "operations management",
            "process improvement",
            "team management",
            "kpi",
            "vendor management",
            "budgeting",
            "six sigma",
        ],
    ),
    (
        "supply chain manager",
        &[
            "supply chain",
            "demand planning",
            "procurement",
            "inventory",
            "vendor management",
            "logistics",
            "s&op",
        ],
    ),
    (
        "procurement manager",
        &[
            "procurement",
            "sourcing",
            "vendor management",
            "negotiation",
            "purchase",
            "rfq",
            "contract management",
        ],
    ),
    (
        "accountant",
        &[
            "tally",
            "accounting",
            "gst",
            "tds",
            "bookkeeping",
            "accounts payable",
            "accounts receivable",
            "bank reconciliation",
        ],
    ),
    (
        "sales manager",
        &[
            "sales",
            "business development",
            "lead generation",
            "crm",
            "negotiation",
            "client acquisition",
            "key account",
        ],
    ),
    (
        "hr manager",
        &[
            "recruitment",
            "payroll",
            "employee relations",
            "onboarding",
            "hrms",
            "talent acquisition",
            "performance management",
        ],
    ),
    (
        "software engineer",
        &[
            "java", "python", "javascript", "react", "sql", "git", "rest api", "aws",
        ],
    ),
    (
        "driver",
        &[
            "driving",
            "heavy vehicle",
            "commercial license",
            "route knowledge",
            "lmv",
            "hmv",
        ],
    ),
    (
        "delivery executive",
        &[
            "last mile",
            "two wheeler",
            "route knowledge",
            "cash handling",
            "delivery",
        ],
    ),
    (
        "customer service executive",
        &[
            "customer service",
            "communication",
            "crm",
            "call handling",
            "complaint resolution",
            "voice process",
        ],
    ),
    (
        "data analyst",
        &[
            "excel",
            "sql",
            "power bi",
            "tableau",
            "python",
            "data analysis",
            "mis reporting",
        ],
    ),
    (
        "quality manager",
        &[
            "quality control",
            "quality assurance",
            "iso 9001",
            "six sigma",
            "root cause analysis",
            "audit",
            "capa",
        ],
    ),
    (
        "production manager",
        &[
            "production planning",
            "manufacturing",
            "lean manufacturing",
            "kaizen",
            "5s",
            "shift management",
            "oee",
        ],
    ),
];

/// Canonical role -> daily tasks a holder of the role is expected to do.
const ROLE_RESPONSIBILITIES: &[(&str, &[&str])] = &[
    (
        "fleet manager",
        &[
            "manage vehicle fleet operations",
            "schedule vehicle maintenance",
            "monitor fuel consumption",
            "plan and optimize routes",
            "track vehicles using gps",
        ],
    ),
    (
        "warehouse manager",
        &[
            "manage warehouse operations",
            "maintain inventory accuracy",
            "oversee inbound and outbound dispatch",
            "supervise warehouse staff",
            "ensure safety compliance",
        ],
    ),
    (
        "logistics manager",
        &[
            "coordinate shipments and deliveries",
            "manage transport vendors",
            "optimize logistics costs",
            "track shipment status",
        ],
    ),
    (
        "operations manager",
        &[
            "oversee daily operations",
            "improve operational processes",
            "manage team performance",
            "monitor operational kpis",
        ],
    ),
    (
        "supply chain manager",
        &[
            "plan demand and supply",
            "manage vendor relationships",
            "optimize inventory levels",
            "coordinate procurement and logistics",
        ],
    ),
    (
        "procurement manager",
        &[
            "source and evaluate vendors",
            "negotiate purchase contracts",
            "raise purchase orders",
            "control procurement costs",
        ],
    ),
    (
        "accountant",
        &[
            "maintain books of accounts",
            "file gst returns",
            "reconcile bank statements",
            "prepare financial reports",
        ],
    ),
    (
        "sales manager",
        &[
            "achieve sales targets",
            "generate new business leads",
            "manage key client accounts",
            "lead the sales team",
        ],
    ),
    (
        "hr manager",
        &[
            "manage end to end recruitment",
            "process monthly payroll",
            "handle employee relations",
            "drive performance appraisals",
        ],
    ),
    (
        "software engineer",
        &[
            "design and develop software",
            "write and review code",
            "debug production issues",
            "build rest apis",
        ],
    ),
    (
        "driver",
        &[
            "drive vehicles safely",
            "deliver goods on schedule",
            "maintain vehicle documents",
            "perform basic vehicle checks",
        ],
    ),
    (
        "delivery executive",
        &[
            "deliver orders to customers",
            "collect cash on delivery",
            "follow delivery routes",
        ],
    ),
    (
        "customer service executive",
        &[
            "handle customer calls",
            "resolve customer complaints",
            "maintain customer records",
        ],
    ),
    (
        "data analyst",
        &[
            "prepare mis reports",
            "analyze business data",
            "build dashboards",
            "write sql queries",
        ],
    ),
    (
        "quality manager",
        &[
            "implement quality control processes",
            "conduct quality audits",
            "perform root cause analysis",
            "maintain iso documentation",
        ],
    ),
    (
        "production manager",
        &[
            "plan production schedules",
            "supervise shop floor operations",
            "improve production efficiency",
            "ensure product quality",
        ],
    ),
];

/// Role phrases recognised in queries. Generic titles sit at the end and are
/// only reached when nothing more specific matched.
const ROLE_KEYWORDS: &[&str] = &[
    "fleet operations manager",
    "customer service executive",
    "supply chain manager",
    "procurement manager",
    "operations executive",
    "operations manager",
    "logistics manager",
    "logistics executive",
    "warehouse manager",
    "warehouse executive",
    "warehouse supervisor",
    "production manager",
    "software engineer",
    "software developer",
    "delivery executive",
    "transport manager",
    "quality manager",
    "purchase manager",
    "store manager",
    "fleet manager",
    "sales manager",
    "sales executive",
    "data analyst",
    "business analyst",
    "hr manager",
    "hr executive",
    "accountant",
    "storekeeper",
    "driver",
    "supervisor",
    "executive",
    "manager",
    "engineer",
    "analyst",
];

/// Canonical role and its depluralized form -> canonical role.
static CANONICAL_INDEX: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (canonical, _) in ROLE_SYNONYMS {
        map.insert(canonical.to_string(), *canonical);
        map.insert(depluralize(canonical), *canonical);
    }
    map
});

/// Synonym title -> canonical role, for mapping extracted titles back.
static SYNONYM_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();
        for (canonical, synonyms) in ROLE_SYNONYMS {
            for synonym in *synonyms {
                map.entry(*synonym).or_insert(*canonical);
            }
        }
        map
    });

/// Keywords ordered longest first so specific titles shadow generic ones.
static ORDERED_ROLE_KEYWORDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut keywords = ROLE_KEYWORDS.to_vec();
    keywords.sort_by(|a, b| b.len().cmp(&a.len()));
    keywords
});

fn lookup(
    table: &'static [(&'static str, &'static [&'static str])],
    canonical: &str,
) -> &'static [&'static str] {
    table
        .iter()
        .find(|(key, _)| *key == canonical)
        .map(|(_, values)| *values)
        .unwrap_or(&[])
}

/// Canonical key for a required role, tried on the raw then depluralized form.
pub fn canonical_key(raw: &str, depluralized: &str) -> Option<&'static str> {
    CANONICAL_INDEX
        .get(raw)
        .or_else(|| CANONICAL_INDEX.get(depluralized))
        .copied()
}

/// Canonical role for a title that is either canonical or a listed synonym.
pub fn canonical_role(title: &str) -> Option<&'static str> {
    canonical_key(title, &depluralize(title))
        .or_else(|| SYNONYM_TO_CANONICAL.get(title).copied())
}

pub fn synonyms(canonical: &str) -> &'static [&'static str] {
    lookup(ROLE_SYNONYMS, canonical)
}

pub fn skill_indicators(canonical: &str) -> &'static [&'static str] {
    lookup(ROLE_SKILL_INDICATORS, canonical)
}

pub fn responsibilities(canonical: &str) -> &'static [&'static str] {
    lookup(ROLE_RESPONSIBILITIES, canonical)
}

pub fn role_keywords() -> &'static [&'static str] {
    &ORDERED_ROLE_KEYWORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_role_has_indicators_and_responsibilities() {
        for (canonical, _) in ROLE_SYNONYMS {
            assert!(!skill_indicators(canonical).is_empty(), "{canonical}");
            assert!(!responsibilities(canonical).is_empty(), "{canonical}");
        }
    }

    #[test]
    fn canonical_key_accepts_plural_forms() {
        assert_eq!(
            canonical_key("fleet managers", "fleet manager"),
            Some("fleet manager")
        );
        assert_eq!(canonical_key("astronaut", "astronaut"), None);
    }

    #[test]
    fn synonym_titles_map_back_to_canonical() {
        assert_eq!(canonical_role("godown manager"), Some("warehouse manager"));
        assert_eq!(canonical_role("warehouse manager"), Some("warehouse manager"));
        assert_eq!(canonical_role("astronaut"), None);
    }

    #[test]
    fn role_keywords_put_specific_titles_before_generic() {
        let keywords = role_keywords();
        let position = |name: &str| keywords.iter().position(|k| *k == name).unwrap();

        assert!(position("operations executive") < position("executive"));
        assert!(position("fleet manager") < position("manager"));
    }
}
