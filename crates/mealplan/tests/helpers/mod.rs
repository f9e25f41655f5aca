#![allow(dead_code)]

use std::sync::{
    Arc,
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

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn meal(meal_type: MealType, name: &str, calories: u32) -> Meal {
    Meal::new(meal_type, name, calories)
}

pub fn day(label: &str, meals: Vec<Meal>) -> DayPlan {
    DayPlan::new(label, meals)
}

pub fn full_day(label: &str) -> DayPlan {
    day(
        label,
        vec![
            meal(MealType::Breakfast, &format!("{label} oats"), 350),
            meal(MealType::Lunch, &format!("{label} salad"), 550),
            meal(MealType::Snack, &format!("{label} yogurt"), 200),
            meal(MealType::Dinner, &format!("{label} salmon"), 650),
        ],
    )
}

/// Seven days; the given ones first, the rest filled with [`full_day`].
pub fn plan_with(days: Vec<DayPlan>) -> WeeklyPlan {
    let mut days = days;
    for label in WEEKDAYS.iter().skip(days.len()) {
        days.push(full_day(label));
    }

    WeeklyPlan::new(days)
}

pub fn sample_plan() -> WeeklyPlan {
    plan_with(vec![
        day(
            "Monday",
            vec![
                meal(MealType::Breakfast, "Oatmeal", 400),
                meal(MealType::Lunch, "Chicken bowl", 600),
                meal(MealType::Snack, "Apple & almonds", 300),
            ],
        ),
        day(
            "Tuesday",
            vec![
                meal(MealType::Breakfast, "Scrambled eggs", 400),
                meal(MealType::Dinner, "Beef stir fry", 700),
            ],
        ),
        day(
            "Wednesday",
            vec![
                Meal::fasting(MealType::Breakfast),
                meal(MealType::Lunch, "Tuna wrap", 550),
                meal(MealType::Dinner, "Veggie curry", 650),
            ],
        ),
    ])
}

#[derive(Default)]
pub struct FakeGateway {
    pub week: Option<WeeklyPlan>,
    pub day: Option<DayPlan>,
    /// When set, `regenerate_day` waits for a notification before answering.
    pub gate: Option<Arc<Notify>>,
    pub day_calls: AtomicUsize,
    pub week_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn with_day(day: DayPlan) -> Self {
        Self {
            day: Some(day),
            ..Default::default()
        }
    }

    pub fn with_week(week: WeeklyPlan) -> Self {
        Self {
            week: Some(week),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn day_calls(&self) -> usize {
        self.day_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn generate_weekly_plan(&self, _preferences: &Preferences) -> anyhow::Result<WeeklyPlan> {
        self.week_calls.fetch_add(1, Ordering::SeqCst);

        self.week
            .clone()
            .ok_or_else(|| anyhow::anyhow!("generator unavailable"))
    }

    async fn regenerate_day(
        &self,
        _day_index: usize,
        _preferences: &Preferences,
        _current: &WeeklyPlan,
    ) -> anyhow::Result<DayPlan> {
        self.day_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = self.gate.as_ref() {
            gate.notified().await;
        }

        self.day
            .clone()
            .ok_or_else(|| anyhow::anyhow!("generator unavailable"))
    }

    async fn generate_recipe_details(&self, _meal: &Meal) -> anyhow::Result<RecipeDetails> {
        anyhow::bail!("not scripted")
    }

    async fn generate_shopping_list(
        &self,
        _plan: &WeeklyPlan,
        _weekly_budget: Option<f64>,
    ) -> anyhow::Result<ShoppingList> {
        anyhow::bail!("not scripted")
    }
}
