use nutriplan_shared::{Gateway, Result, gateway, mealplan::WeeklyPlan, user::Preferences};
use validator::Validate;

use crate::model::{ensure_usable_plan, normalize_plan};

impl<G: Gateway> super::Planner<G> {
    /// Synthesizes a whole week. The caller replaces its plan and resets the
    /// validation tracker and recipe cache together on success.
    #[tracing::instrument(skip_all)]
    pub async fn generate_plan(&self, preferences: &Preferences) -> Result<WeeklyPlan> {
        preferences.validate()?;

        let plan = gateway::call(
            self.timeout,
            "generate weekly plan",
            self.gateway.generate_weekly_plan(preferences),
        )
        .await?;

        let plan = normalize_plan(plan);
        ensure_usable_plan(&plan, &self.settings)?;

        tracing::info!(
            meals = plan.meal_count(),
            total_calories = plan.total_calories(),
            "generated weekly plan"
        );

        Ok(plan)
    }
}
