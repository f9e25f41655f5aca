//! [`Gateway`] over a text completion backend.
//!
//! Requests are rendered into a system/user prompt pair; the reply is
//! expected to carry one JSON object, possibly wrapped in a Markdown code
//! fence or surrounded by prose.

use anyhow::Context;
use async_trait::async_trait;
use nutriplan_shared::{
    Gateway,
    mealplan::{DayPlan, Meal, WeeklyPlan},
    recipe::RecipeDetails,
    shopping::ShoppingList,
    user::Preferences,
};
use serde::de::DeserializeOwned;

const MAX_RESPONSE_LOG_CHARS: usize = 2_000;

const WEEK_SHAPE: &str = r#"{"days":[{"day":"Monday","meals":[{"type":"breakfast|lunch|snack|dinner","name":"","description":"","calories":0,"proteins":0,"carbs":0,"fats":0,"prepTime":0,"isCheatMeal":false,"isFasting":false}]}]}"#;
const DAY_SHAPE: &str = r#"{"day":"Monday","meals":[{"type":"breakfast|lunch|snack|dinner","name":"","description":"","calories":0,"proteins":0,"carbs":0,"fats":0,"prepTime":0,"isCheatMeal":false,"isFasting":false}]}"#;
const RECIPE_SHAPE: &str = r#"{"ingredients":[""],"instructions":[""],"tips":[""]}"#;
const SHOPPING_SHAPE: &str = r#"{"categories":[{"name":"","items":[{"name":"","quantity":"","priceEstimate":0}],"subtotal":0}],"totalEstimate":0,"savingsTips":[""]}"#;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

/// Free-text completion service, such as a chat model endpoint.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> anyhow::Result<String>;
}

pub struct PromptGateway<B: CompletionBackend> {
    backend: B,
}

impl<B: CompletionBackend> PromptGateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn request<T: DeserializeOwned>(
        &self,
        operation: &str,
        shape: &str,
        user: String,
    ) -> anyhow::Result<T> {
        let request = CompletionRequest {
            system: system_prompt(shape),
            user,
        };

        let text = self.backend.complete(request).await?;
        tracing::debug!(
            operation,
            response = %truncate(&text, MAX_RESPONSE_LOG_CHARS),
            "completion received"
        );

        let json = extract_json(&text)
            .with_context(|| format!("{operation}: no JSON object in response"))?;

        serde_json::from_str(json).with_context(|| format!("{operation}: unparseable response"))
    }
}

#[async_trait]
impl<B: CompletionBackend> Gateway for PromptGateway<B> {
    async fn generate_weekly_plan(&self, preferences: &Preferences) -> anyhow::Result<WeeklyPlan> {
        let user = format!(
            "Create a 7-day meal plan, one entry per day starting on Monday.\n{}",
            describe_preferences(preferences)?
        );

        self.request("weekly plan", WEEK_SHAPE, user).await
    }

    async fn regenerate_day(
        &self,
        day_index: usize,
        preferences: &Preferences,
        current: &WeeklyPlan,
    ) -> anyhow::Result<DayPlan> {
        let label = current
            .days
            .get(day_index)
            .map(|d| d.day.as_str())
            .unwrap_or("the day");
        let scheduled = current
            .days
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != day_index)
            .flat_map(|(_, d)| d.meals.iter())
            .filter(|m| !m.is_fasting)
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>();

        let user = format!(
            "Create new meals for {label}. Do not repeat these meals from the rest of the week: {}.\n{}",
            scheduled.join(", "),
            describe_preferences(preferences)?
        );

        self.request("day", DAY_SHAPE, user).await
    }

    async fn generate_recipe_details(&self, meal: &Meal) -> anyhow::Result<RecipeDetails> {
        let user = format!(
            "Write the recipe for \"{}\" ({}): {} kcal, {} g protein, {} g carbs, {} g fat, ready in {} minutes. {}",
            meal.name,
            meal.meal_type,
            meal.calories,
            meal.proteins,
            meal.carbs,
            meal.fats,
            meal.prep_time,
            meal.description
        );

        self.request("recipe", RECIPE_SHAPE, user).await
    }

    async fn generate_shopping_list(
        &self,
        plan: &WeeklyPlan,
        weekly_budget: Option<f64>,
    ) -> anyhow::Result<ShoppingList> {
        let meals = plan
            .days
            .iter()
            .flat_map(|d| {
                d.meals
                    .iter()
                    .filter(|m| !m.is_fasting)
                    .map(move |m| format!("{}: {}", d.day, m.name))
            })
            .collect::<Vec<_>>();

        let mut user = format!(
            "Build a shopping list grouped by store section with estimated prices for these meals:\n{}",
            meals.join("\n")
        );
        if let Some(budget) = weekly_budget {
            user.push_str(&format!("\nThe weekly budget is {budget:.2}."));
        }

        self.request("shopping list", SHOPPING_SHAPE, user).await
    }
}

fn system_prompt(shape: &str) -> String {
    format!(
        "You are a nutrition assistant. Reply with a single JSON object and nothing else, using exactly this shape: {shape}"
    )
}

fn describe_preferences(preferences: &Preferences) -> anyhow::Result<String> {
    let json = serde_json::to_string(preferences).context("serialize preferences")?;
    Ok(format!("Preferences: {json}"))
}

/// The JSON object in a completion, if any.
///
/// Prefers the body of a fenced code block; otherwise spans from the first
/// `{` to the last `}`.
pub fn extract_json(text: &str) -> Option<&str> {
    let body = fenced_body(text).unwrap_or(text);
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    if end <= start {
        return None;
    }

    Some(&body[start..=end])
}

fn fenced_body(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let rest = &text[open + 3..];
    // Skip the info string, e.g. "json"
    let rest = &rest[rest.find('\n')? + 1..];
    let close = rest.find("```")?;

    Some(&rest[..close])
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
