use std::time::Duration;

/// Limits applied to every gateway call and to what it returns.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    pub timeout: Duration,
    pub min_meals_per_day: usize,
    pub min_ingredients: usize,
    pub min_instructions: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(90),
            min_meals_per_day: 1,
            min_ingredients: 2,
            min_instructions: 1,
        }
    }
}
