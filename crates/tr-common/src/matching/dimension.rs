use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// One scoring axis. Declaration order is the order details are reported in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumIter,
)]
pub enum Dimension {
    Role,
    Experience,
    Location,
    Skills,
    Education,
    Responsibility,
}

impl Dimension {
    /// Label used in gap analysis.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Role => "Role",
            Dimension::Experience => "Experience",
            Dimension::Location => "Location",
            Dimension::Skills => "Skills",
            Dimension::Education => "Education",
            Dimension::Responsibility => "Responsibilities",
        }
    }
}
