use std::{ops::Deref, sync::Arc};

use nutriplan_shared::{
    Gateway, GenerationSettings, Result, gateway, mealplan::WeeklyPlan, shopping::ShoppingList,
};
use serde::Serialize;

use crate::{BudgetDelta, budget_delta};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingReport {
    pub list: ShoppingList,
    /// Present only when a weekly budget was supplied.
    pub budget: Option<BudgetDelta>,
}

pub struct ShoppingAggregator<G: Gateway> {
    gateway: Arc<G>,
    settings: GenerationSettings,
}

impl<G: Gateway> Clone for ShoppingAggregator<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl<G: Gateway> Deref for ShoppingAggregator<G> {
    type Target = GenerationSettings;

    fn deref(&self) -> &Self::Target {
        &self.settings
    }
}

impl<G: Gateway> ShoppingAggregator<G> {
    pub fn new(gateway: Arc<G>, settings: GenerationSettings) -> Self {
        Self { gateway, settings }
    }

    /// Builds a fresh list for `plan` and reconciles it against
    /// `weekly_budget`.
    ///
    /// Categories and prices come from the generator as-is. A list without
    /// a single item is an [`nutriplan_shared::Error::EmptyResult`].
    #[tracing::instrument(skip(self, plan))]
    pub async fn build(&self, plan: &WeeklyPlan, weekly_budget: Option<f64>) -> Result<ShoppingReport> {
        match weekly_budget {
            Some(budget) if !(budget.is_finite() && budget > 0.0) => {
                nutriplan_shared::precondition!("weekly budget must be positive, got {}", budget)
            }
            _ => {}
        }

        let editable = plan
            .days
            .iter()
            .map(|d| d.editable_meal_indices().count())
            .sum::<usize>();
        if editable == 0 {
            nutriplan_shared::precondition!("plan has no meals to shop for");
        }

        let list = gateway::call(
            self.timeout,
            "generate shopping list",
            self.gateway.generate_shopping_list(plan, weekly_budget),
        )
        .await?;

        if list.item_count() == 0 {
            nutriplan_shared::empty!("shopping list has no items");
        }

        let budget = weekly_budget.map(|budget| budget_delta(list.total_estimate, budget));

        tracing::info!(
            categories = list.categories.len(),
            items = list.item_count(),
            total_estimate = list.total_estimate,
            delta = budget.map(|b| b.delta),
            "built shopping list"
        );

        Ok(ShoppingReport { list, budget })
    }
}
