#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use nutriplan_mealplan::{PlanSnapshot, PlanStore};
use nutriplan_shared::{
    Gateway,
    mealplan::{DayPlan, Meal, MealType, WeeklyPlan},
    recipe::RecipeDetails,
    shopping::{ShoppingCategory, ShoppingItem, ShoppingList},
    user::Preferences,
};

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Monday starts with a fasting window, every day has three meals after it.
pub fn week(prefix: &str) -> WeeklyPlan {
    let days = WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut meals = Vec::new();
            if i == 0 {
                meals.push(Meal::fasting(MealType::Breakfast));
            } else {
                meals.push(Meal::new(MealType::Breakfast, format!("{prefix} oats {i}"), 400));
            }
            meals.push(Meal::new(MealType::Lunch, format!("{prefix} salad {i}"), 550));
            meals.push(Meal::new(MealType::Dinner, format!("{prefix} curry {i}"), 650));

            DayPlan {
                day: label.to_string(),
                meals,
                total_calories: 0,
            }
        })
        .collect();

    WeeklyPlan::new(days)
}

pub fn replacement_day() -> DayPlan {
    DayPlan::new(
        "Generated",
        vec![
            Meal::new(MealType::Breakfast, "Shakshuka", 450),
            Meal::new(MealType::Dinner, "Grilled trout", 620),
        ],
    )
}

pub fn recipe() -> RecipeDetails {
    RecipeDetails {
        ingredients: vec!["200 g chickpeas".to_owned(), "1 onion".to_owned()],
        instructions: vec!["Fry the onion".to_owned(), "Add chickpeas and simmer".to_owned()],
        tips: vec![],
    }
}

pub fn groceries() -> ShoppingList {
    ShoppingList {
        categories: vec![ShoppingCategory {
            name: "Pantry".to_owned(),
            items: vec![ShoppingItem {
                name: "Chickpeas".to_owned(),
                quantity: "1 kg".to_owned(),
                price_estimate: 85.0,
            }],
            subtotal: 85.0,
        }],
        total_estimate: 85.0,
        savings_tips: vec![],
    }
}

/// Scripted generator; a `None` script makes that call fail.
#[derive(Default)]
pub struct FakeGateway {
    pub weeks: Mutex<Vec<WeeklyPlan>>,
    pub day: Option<DayPlan>,
    pub recipe: Option<RecipeDetails>,
    pub list: Option<ShoppingList>,
    pub calls: AtomicUsize,
}

impl FakeGateway {
    /// Full weeks are handed out in order, one per call.
    pub fn with_weeks(weeks: Vec<WeeklyPlan>) -> Self {
        Self {
            weeks: Mutex::new(weeks),
            day: Some(replacement_day()),
            recipe: Some(recipe()),
            list: Some(groceries()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn generate_weekly_plan(&self, _preferences: &Preferences) -> anyhow::Result<WeeklyPlan> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut weeks = self.weeks.lock().unwrap();
        if weeks.is_empty() {
            anyhow::bail!("generator unavailable");
        }

        Ok(weeks.remove(0))
    }

    async fn regenerate_day(
        &self,
        _day_index: usize,
        _preferences: &Preferences,
        _current: &WeeklyPlan,
    ) -> anyhow::Result<DayPlan> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.day
            .clone()
            .ok_or_else(|| anyhow::anyhow!("generator unavailable"))
    }

    async fn generate_recipe_details(&self, _meal: &Meal) -> anyhow::Result<RecipeDetails> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.recipe
            .clone()
            .ok_or_else(|| anyhow::anyhow!("generator unavailable"))
    }

    async fn generate_shopping_list(
        &self,
        _plan: &WeeklyPlan,
        _weekly_budget: Option<f64>,
    ) -> anyhow::Result<ShoppingList> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.list
            .clone()
            .ok_or_else(|| anyhow::anyhow!("generator unavailable"))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub snapshots: Mutex<Vec<PlanSnapshot>>,
    pub failing: bool,
}

#[async_trait]
impl PlanStore for MemoryStore {
    async fn persist_plan(&self, snapshot: &PlanSnapshot) -> anyhow::Result<String> {
        if self.failing {
            anyhow::bail!("store offline");
        }

        let mut snapshots = self.snapshots.lock().unwrap();
        snapshots.push(snapshot.clone());

        Ok(format!("plan-{}", snapshots.len()))
    }
}
