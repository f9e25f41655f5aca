use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DAYS_PER_WEEK: usize = 7;

/// Meal types in the order they are served during a day.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Snack,
    Dinner,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub calories: u32,
    #[serde(default)]
    pub proteins: f32,
    #[serde(default)]
    pub carbs: f32,
    #[serde(default)]
    pub fats: f32,
    /// Minutes.
    #[serde(default)]
    pub prep_time: u16,
    #[serde(default)]
    pub is_cheat_meal: bool,
    #[serde(default)]
    pub is_fasting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
}

impl Meal {
    pub fn new(meal_type: MealType, name: impl Into<String>, calories: u32) -> Self {
        Self {
            meal_type,
            name: name.into(),
            calories,
            ..Default::default()
        }
    }

    /// A scheduled non-eating window.
    pub fn fasting(meal_type: MealType) -> Self {
        Self {
            meal_type,
            name: "Fasting".to_owned(),
            is_fasting: true,
            ..Default::default()
        }
    }
}

/// Calorie sum that clamps at `u32::MAX` instead of overflowing.
pub fn sum_calories(calories: impl IntoIterator<Item = u32>) -> u32 {
    calories.into_iter().fold(0, u32::saturating_add)
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Derived from `meals`, recomputed after every structural change.
    #[serde(default)]
    pub total_calories: u32,
}

impl DayPlan {
    pub fn new(day: impl Into<String>, meals: Vec<Meal>) -> Self {
        let total_calories = sum_calories(meals.iter().map(|m| m.calories));

        Self {
            day: day.into(),
            meals,
            total_calories,
        }
    }

    pub fn meal(&self, index: usize) -> Option<&Meal> {
        self.meals.get(index)
    }

    /// Positions of the meals a user can confirm, delete or move.
    pub fn editable_meal_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.meals
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_fasting)
            .map(|(i, _)| i)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub fn new(days: Vec<DayPlan>) -> Self {
        Self { days }
    }

    pub fn day(&self, index: usize) -> crate::Result<&DayPlan> {
        match self.days.get(index) {
            Some(day) => Ok(day),
            None => crate::precondition!(
                "day index {} out of range (plan has {} days)",
                index,
                self.days.len()
            ),
        }
    }

    pub fn meal(&self, position: MealPosition) -> crate::Result<&Meal> {
        let day = self.day(position.day)?;
        match day.meal(position.meal) {
            Some(meal) => Ok(meal),
            None => crate::precondition!(
                "meal index {} out of range on day {} ({} meals)",
                position.meal,
                position.day,
                day.meals.len()
            ),
        }
    }

    /// Like [`WeeklyPlan::meal`], but rejects fasting slots.
    pub fn editable_meal(&self, position: MealPosition) -> crate::Result<&Meal> {
        let meal = self.meal(position)?;
        if meal.is_fasting {
            crate::precondition!("meal {} is a fasting window", position);
        }

        Ok(meal)
    }

    pub fn total_calories(&self) -> u32 {
        sum_calories(self.days.iter().map(|d| d.total_calories))
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }
}

/// Structural position of a meal, rendered as `"{day}-{meal}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealPosition {
    pub day: usize,
    pub meal: usize,
}

impl MealPosition {
    pub fn new(day: usize, meal: usize) -> Self {
        Self { day, meal }
    }
}

impl fmt::Display for MealPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.meal)
    }
}

impl FromStr for MealPosition {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s
            .split_once('-')
            .and_then(|(day, meal)| Some((day.parse::<usize>().ok()?, meal.parse::<usize>().ok()?)));

        match parsed {
            Some((day, meal)) => Ok(Self { day, meal }),
            None => crate::precondition!("invalid meal key '{}'", s),
        }
    }
}
