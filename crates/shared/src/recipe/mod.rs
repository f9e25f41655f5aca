use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RecipeDetails {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl RecipeDetails {
    pub fn is_usable(&self, min_ingredients: usize, min_instructions: usize) -> bool {
        self.ingredients.iter().filter(|i| !i.trim().is_empty()).count() >= min_ingredients
            && self
                .instructions
                .iter()
                .filter(|i| !i.trim().is_empty())
                .count()
                >= min_instructions
    }
}
