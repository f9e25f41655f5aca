use nutriplan_shared::{
    Gateway, Result, gateway,
    mealplan::{DAYS_PER_WEEK, DayPlan, WeeklyPlan},
    user::Preferences,
};
use validator::Validate;

use crate::model::{ensure_usable_day, recompute_day_total};

impl<G: Gateway> super::Planner<G> {
    /// Generates replacement meals for one day of `plan`.
    ///
    /// The returned day carries the label of `plan.days[day_index]` and a
    /// fresh total; splice it in with [`crate::replace_day`]. `plan` itself is
    /// only read. A second call for a day that is still regenerating is
    /// rejected with [`nutriplan_shared::Error::InFlight`] without reaching
    /// the gateway.
    #[tracing::instrument(skip(self, plan, preferences))]
    pub async fn regenerate_day(
        &self,
        plan: &WeeklyPlan,
        day_index: usize,
        preferences: &Preferences,
    ) -> Result<DayPlan> {
        if day_index >= DAYS_PER_WEEK {
            nutriplan_shared::precondition!(
                "day index {} out of range 0..{}",
                day_index,
                DAYS_PER_WEEK
            );
        }

        let label = plan.day(day_index)?.day.clone();
        preferences.validate()?;

        let _guard = self.regenerating.try_acquire(day_index)?;

        let day = gateway::call(
            self.timeout,
            "regenerate day",
            self.gateway.regenerate_day(day_index, preferences, plan),
        )
        .await?;

        let day = recompute_day_total(DayPlan {
            day: label,
            ..day
        });
        ensure_usable_day(&day, &self.settings)?;

        tracing::info!(
            day_index,
            meals = day.meals.len(),
            total_calories = day.total_calories,
            "regenerated day"
        );

        Ok(day)
    }
}
