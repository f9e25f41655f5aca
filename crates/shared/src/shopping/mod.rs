use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub price_estimate: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    #[serde(default)]
    pub subtotal: f64,
}

/// Categorized list priced by the generator; never partially updated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    #[serde(default)]
    pub categories: Vec<ShoppingCategory>,
    #[serde(default)]
    pub total_estimate: f64,
    #[serde(default)]
    pub savings_tips: Vec<String>,
}

impl ShoppingList {
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}
