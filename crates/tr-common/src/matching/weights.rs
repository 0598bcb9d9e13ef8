use super::dimension::Dimension;

/// Default weight table. Sums to 100 when every dimension is active.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    role: 30.0,
    responsibility: 20.0,
    experience: 15.0,
    skills: 15.0,
    location: 15.0,
    education: 5.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub role: f64,
    pub responsibility: f64,
    pub experience: f64,
    pub skills: f64,
    pub location: f64,
    pub education: f64,
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn for_dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Role => self.role,
            Dimension::Experience => self.experience,
            Dimension::Location => self.location,
            Dimension::Skills => self.skills,
            Dimension::Education => self.education,
            Dimension::Responsibility => self.responsibility,
        }
    }

    pub fn sum(&self) -> f64 {
        self.role + self.responsibility + self.experience + self.skills + self.location + self.education
    }

    /// Sum over the given dimensions only.
    pub fn sum_of(&self, dimensions: &[Dimension]) -> f64 {
        dimensions.iter().map(|d| self.for_dimension(*d)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_weights_sum_to_hundred() {
        assert!((DEFAULT_WEIGHTS.sum() - 100.0).abs() < 1e-9);
        let all: Vec<_> = Dimension::iter().collect();
        assert!((DEFAULT_WEIGHTS.sum_of(&all) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn role_carries_the_largest_weight() {
        let weights = Weights::default();
        assert!(Dimension::iter().all(|d| weights.for_dimension(Dimension::Role) >= weights.for_dimension(d)));
    }
}
