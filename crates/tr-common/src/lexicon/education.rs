use lazy_static::lazy_static;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::normalize::contains_term;

/// Education ladder, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Diploma,
    Bachelor,
    Master,
    Phd,
}

impl EducationLevel {
    fn keywords(self) -> &'static [&'static str] {
        match self {
            EducationLevel::HighSchool => &[
                "high school",
                "higher secondary",
                "secondary",
                "intermediate",
                "matriculation",
                "12th",
                "10th",
                "hsc",
                "ssc",
            ],
            EducationLevel::Diploma => &["diploma", "polytechnic", "iti"],
            EducationLevel::Bachelor => &[
                "bachelor",
                "bachelors",
                "graduate",
                "graduation",
                "degree",
                "b.tech",
                "btech",
                "b.e",
                "b.sc",
                "bsc",
                "b.com",
                "bcom",
                "bba",
                "bca",
                "b.a",
            ],
            EducationLevel::Master => &[
                "master",
                "masters",
                "postgraduate",
                "post graduate",
                "mba",
                "pgdm",
                "m.tech",
                "mtech",
                "m.e",
                "m.sc",
                "msc",
                "m.com",
                "mcom",
                "mca",
                "m.a",
            ],
            EducationLevel::Phd => &["phd", "ph.d", "doctorate", "doctoral"],
        }
    }

    /// Highest level whose keyword appears as a whole term in `text`.
    /// Expects the normalized form.
    pub fn resolve(text: &str) -> Option<Self> {
        EducationLevel::iter()
            .rev()
            .find(|level| level.keywords().iter().any(|kw| contains_term(text, kw)))
    }
}

lazy_static! {
    /// Education phrases recognised in queries, most specific first.
    pub static ref EDUCATION_KEYWORDS: Vec<(&'static str, &'static str)> = vec![
        ("phd", "PhD"),
        ("doctorate", "PhD"),
        ("mba", "MBA"),
        ("pgdm", "PGDM"),
        ("m.tech", "M.Tech"),
        ("mtech", "M.Tech"),
        ("mca", "MCA"),
        ("m.com", "M.Com"),
        ("postgraduate", "Postgraduate"),
        ("post graduate", "Postgraduate"),
        ("master", "Master's"),
        ("b.tech", "B.Tech"),
        ("btech", "B.Tech"),
        ("bba", "BBA"),
        ("bca", "BCA"),
        ("b.com", "B.Com"),
        ("bcom", "B.Com"),
        ("b.sc", "B.Sc"),
        ("bachelor", "Bachelor's"),
        ("graduate", "Graduate"),
        ("diploma", "Diploma"),
        ("12th", "12th Pass"),
        ("10th", "10th Pass"),
        ("high school", "High School"),
    ];
}
