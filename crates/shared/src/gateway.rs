//! Contract with the content generator.
//!
//! The generator synthesizes meals, recipes and shopping lists from a
//! preference profile. Implementations report any failure through
//! `anyhow::Error`; [`call`] folds failures and timeouts into
//! [`crate::Error::Generation`].

use std::{future::Future, time::Duration};

use async_trait::async_trait;

use crate::{
    mealplan::{DayPlan, Meal, WeeklyPlan},
    recipe::RecipeDetails,
    shopping::ShoppingList,
    user::Preferences,
};

#[async_trait]
pub trait Gateway: Send + Sync {
    async fn generate_weekly_plan(&self, preferences: &Preferences) -> anyhow::Result<WeeklyPlan>;

    /// `current` is the whole week so the generator can avoid repeating meals.
    async fn regenerate_day(
        &self,
        day_index: usize,
        preferences: &Preferences,
        current: &WeeklyPlan,
    ) -> anyhow::Result<DayPlan>;

    async fn generate_recipe_details(&self, meal: &Meal) -> anyhow::Result<RecipeDetails>;

    async fn generate_shopping_list(
        &self,
        plan: &WeeklyPlan,
        weekly_budget: Option<f64>,
    ) -> anyhow::Result<ShoppingList>;
}

/// Awaits a gateway call, treating "no response in time" like any other failure.
pub async fn call<T, F>(timeout: Duration, operation: &str, fut: F) -> crate::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            tracing::warn!(operation, error = %err, "gateway call failed");
            Err(crate::Error::Generation(format!("{operation}: {err:#}")))
        }
        Err(_) => {
            tracing::warn!(operation, timeout_secs = timeout.as_secs(), "gateway call timed out");
            Err(crate::Error::Generation(format!(
                "{operation}: no response after {}s",
                timeout.as_secs()
            )))
        }
    }
}
