use serde::{Deserialize, Serialize};

/// One observation: the age-adjusted death rate for a cause in a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortalityRecord {
    pub year: i32,
    pub cause: String,
    /// Deaths per 100,000 population, age adjusted.
    pub age_adjusted_death_rate: f64,
}

impl MortalityRecord {
    #[must_use]
    pub fn new(year: i32, cause: impl Into<String>, age_adjusted_death_rate: f64) -> Self {
        Self {
            year,
            cause: cause.into(),
            age_adjusted_death_rate,
        }
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        self.age_adjusted_death_rate
    }

    /// Returns whether the rate is a plausible observation under `ceiling`.
    ///
    /// Non-finite rates never pass.
    #[must_use]
    pub fn is_plausible(&self, ceiling: f64) -> bool {
        self.age_adjusted_death_rate.is_finite() && self.age_adjusted_death_rate < ceiling
    }
}
