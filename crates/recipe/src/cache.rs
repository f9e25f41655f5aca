use std::{collections::HashMap, fmt};

use nutriplan_shared::{mealplan::MealPosition, recipe::RecipeDetails};

/// `"{day}-{meal}-{name}"`; the name guards against reusing details after a
/// slot was refilled with a different meal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecipeKey {
    pub position: MealPosition,
    pub name: String,
}

impl RecipeKey {
    pub fn new(day_index: usize, meal_index: usize, name: impl Into<String>) -> Self {
        Self {
            position: MealPosition::new(day_index, meal_index),
            name: name.into(),
        }
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.position, self.name)
    }
}

/// Lazily filled; entries are never invalidated by plan mutations.
#[derive(Clone, Debug, Default)]
pub struct RecipeCache {
    entries: HashMap<RecipeKey, RecipeDetails>,
}

impl RecipeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day_index: usize, meal_index: usize, name: &str) -> Option<&RecipeDetails> {
        self.entries
            .get(&RecipeKey::new(day_index, meal_index, name))
    }

    pub fn put(
        &mut self,
        day_index: usize,
        meal_index: usize,
        name: impl Into<String>,
        details: RecipeDetails,
    ) {
        self.insert(RecipeKey::new(day_index, meal_index, name), details);
    }

    pub fn get_key(&self, key: &RecipeKey) -> Option<&RecipeDetails> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: RecipeKey, details: RecipeDetails) {
        self.entries.insert(key, details);
    }

    pub fn contains(&self, key: &RecipeKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
