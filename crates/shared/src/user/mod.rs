use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    #[default]
    Balanced,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
    Mediterranean,
    HighProtein,
    LowCarb,
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
)]
#[serde(rename_all = "snake_case")]
pub enum CookingSkill {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Budget,
    #[default]
    Standard,
    Premium,
}

/// Intermittent fasting eating window, e.g. 16:8 starting at noon.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FastingSchedule {
    #[validate(range(max = 23))]
    pub window_start_hour: u8,
    #[validate(range(min = 1, max = 23))]
    pub eating_window_hours: u8,
}

impl FastingSchedule {
    pub fn fasting_hours(&self) -> u8 {
        24u8.saturating_sub(self.eating_window_hours)
    }
}

/// Input to the generator; never mutated by the planning core.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[validate(range(min = 800, max = 6000))]
    pub daily_calories: u32,
    #[validate(range(min = 0.0))]
    pub protein_grams: f32,
    #[validate(range(min = 0.0))]
    pub carbs_grams: f32,
    #[validate(range(min = 0.0))]
    pub fats_grams: f32,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub cooking_skill: CookingSkill,
    #[validate(range(min = 5, max = 240))]
    pub max_cooking_minutes: u16,
    #[validate(range(min = 1, max = 6))]
    pub meals_per_day: u8,
    #[validate(nested)]
    #[serde(default)]
    pub fasting: Option<FastingSchedule>,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default)]
    pub weekly_budget: Option<f64>,
    #[serde(default)]
    pub price_tier: Option<PriceTier>,
    #[serde(default)]
    pub cheat_meal: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            daily_calories: 2000,
            protein_grams: 120.0,
            carbs_grams: 220.0,
            fats_grams: 70.0,
            diet_type: DietType::default(),
            allergies: Vec::new(),
            cooking_skill: CookingSkill::default(),
            max_cooking_minutes: 45,
            meals_per_day: 4,
            fasting: None,
            weekly_budget: None,
            price_tier: None,
            cheat_meal: false,
        }
    }
}
