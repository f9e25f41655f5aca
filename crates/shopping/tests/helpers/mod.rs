#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use nutriplan_shared::{
    Gateway,
    mealplan::{DayPlan, Meal, MealType, WeeklyPlan},
    recipe::RecipeDetails,
    shopping::{ShoppingCategory, ShoppingItem, ShoppingList},
    user::Preferences,
};

pub fn plan() -> WeeklyPlan {
    let days = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        .into_iter()
        .map(|label| {
            DayPlan::new(
                label,
                vec![
                    Meal::new(MealType::Breakfast, "Oatmeal", 400),
                    Meal::new(MealType::Dinner, "Lentil soup", 600),
                ],
            )
        })
        .collect();

    WeeklyPlan::new(days)
}

pub fn fasting_plan() -> WeeklyPlan {
    let days = (0..7)
        .map(|i| DayPlan::new(format!("Day {i}"), vec![Meal::fasting(MealType::Breakfast)]))
        .collect();

    WeeklyPlan::new(days)
}

fn item(name: &str, quantity: &str, price_estimate: f64) -> ShoppingItem {
    ShoppingItem {
        name: name.to_owned(),
        quantity: quantity.to_owned(),
        price_estimate,
    }
}

/// Two categories totalling 85.
pub fn groceries() -> ShoppingList {
    ShoppingList {
        categories: vec![
            ShoppingCategory {
                name: "Pantry".to_owned(),
                items: vec![item("Rolled oats", "1 kg", 4.5), item("Red lentils", "2 kg", 7.5)],
                subtotal: 12.0,
            },
            ShoppingCategory {
                name: "Produce".to_owned(),
                items: vec![item("Carrots", "1.5 kg", 3.0), item("Berries", "7 punnets", 70.0)],
                subtotal: 73.0,
            },
        ],
        total_estimate: 85.0,
        savings_tips: vec!["Buy frozen berries".to_owned()],
    }
}

#[derive(Default)]
pub struct FakeGateway {
    pub list: Option<ShoppingList>,
    pub list_calls: AtomicUsize,
    pub budgets: Mutex<Vec<Option<f64>>>,
}

impl FakeGateway {
    pub fn with_list(list: ShoppingList) -> Self {
        Self {
            list: Some(list),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
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

    async fn generate_recipe_details(&self, _meal: &Meal) -> anyhow::Result<RecipeDetails> {
        anyhow::bail!("not scripted")
    }

    async fn generate_shopping_list(
        &self,
        _plan: &WeeklyPlan,
        weekly_budget: Option<f64>,
    ) -> anyhow::Result<ShoppingList> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.budgets.lock().unwrap().push(weekly_budget);

        self.list
            .clone()
            .ok_or_else(|| anyhow::anyhow!("generator unavailable"))
    }
}
