//! Fixed lookup tables shared by the matchers and the rule-based extractor.
//!
//! Tables are plain data initialised once; matchers only read them.

pub mod education;
pub mod geo;
pub mod roles;
pub mod skills;

/// Industry phrases recognised in queries: (needle, display form).
pub const INDUSTRY_KEYWORDS: &[(&str, &str)] = &[
    ("e-commerce", "E-commerce"),
    ("ecommerce", "E-commerce"),
    ("cold chain", "Cold Chain"),
    ("3pl", "3PL"),
    ("logistics", "Logistics"),
    ("warehousing", "Warehousing"),
    ("transportation", "Transportation"),
    ("manufacturing", "Manufacturing"),
    ("fmcg", "FMCG"),
    ("retail", "Retail"),
    ("automobile", "Automobile"),
    ("automotive", "Automobile"),
    ("pharma", "Pharmaceuticals"),
    ("banking", "Banking"),
    ("it services", "IT Services"),
    ("construction", "Construction"),
    ("healthcare", "Healthcare"),
    ("telecom", "Telecom"),
    ("hospitality", "Hospitality"),
    ("textile", "Textile"),
];

/// Words ignored when splitting a responsibility into keywords.
pub const RESPONSIBILITY_STOP_WORDS: &[&str] = &[
    "with", "from", "that", "this", "have", "will", "their", "them", "into", "over", "under",
    "such", "including", "ensure", "ensuring", "daily", "other", "across", "about", "within",
    "using", "based", "through", "manage", "handle",
];
