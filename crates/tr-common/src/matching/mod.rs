//! Candidate scoring: one matcher per dimension, the weighted scorer that
//! combines them, the hard-filter gate and the ranking pipeline.

pub mod dimension;
pub mod education;
pub mod experience;
pub mod gate;
pub mod location;
pub mod pipeline;
pub mod responsibility;
pub mod role;
pub mod scoring;
pub mod skills;
pub mod weights;

/// Raw matcher output: a score in [0,1] and a human-readable reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub score: f64,
    pub details: String,
}

impl Evaluation {
    pub fn new(score: f64, details: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            details: details.into(),
        }
    }
}
