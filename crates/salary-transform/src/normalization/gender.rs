//! Gender code mapping.

use salary_model::GenderOptions;

/// Outcome of matching a gender value against the configured literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenderMatch {
    Male,
    Female,
    /// Matched neither literal; carries the trimmed value.
    Unmapped(String),
}

impl GenderMatch {
    /// Output code: `M`, `F`, or the unmapped value unchanged.
    pub fn into_code(self) -> String {
        match self {
            GenderMatch::Male => "M".to_string(),
            GenderMatch::Female => "F".to_string(),
            GenderMatch::Unmapped(value) => value,
        }
    }
}

/// Match a trimmed value exactly against the male, then female literal.
pub fn classify_gender(value: &str, options: &GenderOptions) -> GenderMatch {
    let trimmed = value.trim();
    if trimmed == options.male_is {
        GenderMatch::Male
    } else if trimmed == options.female_is {
        GenderMatch::Female
    } else {
        GenderMatch::Unmapped(trimmed.to_string())
    }
}
