#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use nutriplan_shared::{
    Gateway,
    mealplan::{DayPlan, Meal, MealType, WeeklyPlan},
    recipe::RecipeDetails,
    shopping::ShoppingList,
    user::Preferences,
};
use tokio::sync::Notify;

pub fn plan() -> WeeklyPlan {
    let mut days = vec![
        DayPlan::new(
            "Monday",
            vec![
                Meal::new(MealType::Breakfast, "Oatmeal", 400),
                Meal::new(MealType::Lunch, "Chicken bowl", 600),
            ],
        ),
        DayPlan::new(
            "Tuesday",
            vec![
                Meal::fasting(MealType::Breakfast),
                Meal::new(MealType::Dinner, "Veggie curry", 650),
            ],
        ),
    ];
    for label in ["Wednesday", "Thursday", "Friday", "Saturday", "Sunday"] {
        days.push(DayPlan::new(
            label,
            vec![Meal::new(MealType::Dinner, format!("{label} stew"), 700)],
        ));
    }

    WeeklyPlan::new(days)
}

pub fn recipe(ingredients: &[&str], instructions: &[&str]) -> RecipeDetails {
    RecipeDetails {
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        tips: vec!["Serve warm".to_owned()],
    }
}

pub fn oatmeal_recipe() -> RecipeDetails {
    recipe(
        &["80 g rolled oats", "250 ml milk", "1 banana"],
        &["Simmer the oats in milk for 5 minutes", "Top with sliced banana"],
    )
}

#[derive(Default)]
pub struct FakeGateway {
    pub recipe: Option<RecipeDetails>,
    /// When set, `generate_recipe_details` waits for a notification first.
    pub gate: Option<Arc<Notify>>,
    pub recipe_calls: AtomicUsize,
    pub requested: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn with_recipe(recipe: RecipeDetails) -> Self {
        Self {
            recipe: Some(recipe),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn recipe_calls(&self) -> usize {
        self.recipe_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn generate_weekly_plan(&self, _preferences: &Preferences) -> anyhow::Result<WeeklyPlan> {
        anyhow::bail!("not scripted")
    }

    async fn regenerate_day(
        &self,
        _day_index: usize,
        _preferences: &Preferences,
        _current: &WeeklyPlan,
    ) -> anyhow::Result<DayPlan> {
        anyhow::bail!("not scripted")
    }

    async fn generate_recipe_details(&self, meal: &Meal) -> anyhow::Result<RecipeDetails> {
        self.recipe_calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(meal.name.clone());

        if let Some(gate) = self.gate.as_ref() {
            gate.notified().await;
        }

        self.recipe
            .clone()
            .ok_or_else(|| anyhow::anyhow!("generator unavailable"))
    }

    async fn generate_shopping_list(
        &self,
        _plan: &WeeklyPlan,
        _weekly_budget: Option<f64>,
    ) -> anyhow::Result<ShoppingList> {
        anyhow::bail!("not scripted")
    }
}
