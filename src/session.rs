use std::sync::Arc;

use nutriplan_mealplan::{
    PlanSnapshot, PlanStore, Planner, ValidationProgress, ValidationTracker, delete_meal,
    move_meal, normalize_plan, reorder_meals, replace_day,
};
use nutriplan_recipe::{RecipeBook, RecipeLookup};
use nutriplan_shared::{
    Gateway, GenerationSettings, Result,
    mealplan::{DAYS_PER_WEEK, DayPlan, Meal, MealPosition, WeeklyPlan},
    user::Preferences,
};
use nutriplan_shopping::{ShoppingAggregator, ShoppingReport};
use ulid::Ulid;

/// Meals generated for one day, waiting to be applied with
/// [`PlanSession::apply_day`].
#[derive(Clone, Debug, PartialEq)]
pub struct DayRegeneration {
    pub day_index: usize,
    pub day: DayPlan,
}

/// One user's editing session over a weekly plan.
///
/// Owns the plan, its validation tracker and its recipe cache. Full
/// regeneration resets all three together; every other operation touches
/// only what it names. Failed operations leave the session unchanged.
pub struct PlanSession<G: Gateway> {
    id: Ulid,
    plan: WeeklyPlan,
    validations: ValidationTracker,
    planner: Planner<G>,
    recipes: RecipeBook<G>,
    shopping: ShoppingAggregator<G>,
}

impl<G: Gateway> PlanSession<G> {
    /// Starts a session over an existing plan; day totals are recomputed.
    ///
    /// The plan must hold exactly one entry per weekday.
    pub fn from_plan(gateway: Arc<G>, settings: GenerationSettings, plan: WeeklyPlan) -> Result<Self> {
        if plan.days.len() != DAYS_PER_WEEK {
            nutriplan_shared::precondition!(
                "plan has {} days, expected {}",
                plan.days.len(),
                DAYS_PER_WEEK
            );
        }

        Ok(Self {
            id: Ulid::new(),
            plan: normalize_plan(plan),
            validations: ValidationTracker::new(),
            planner: Planner::new(gateway.clone(), settings.clone()),
            recipes: RecipeBook::new(gateway.clone(), settings.clone()),
            shopping: ShoppingAggregator::new(gateway, settings),
        })
    }

    pub async fn generate(
        gateway: Arc<G>,
        settings: GenerationSettings,
        preferences: &Preferences,
    ) -> Result<Self> {
        let planner = Planner::new(gateway.clone(), settings.clone());
        let plan = planner.generate_plan(preferences).await?;

        let session = Self::from_plan(gateway, settings, plan)?;
        tracing::info!(session = %session.id, "plan session started");

        Ok(session)
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn validations(&self) -> &ValidationTracker {
        &self.validations
    }

    pub fn planner(&self) -> &Planner<G> {
        &self.planner
    }

    pub fn recipes(&self) -> &RecipeBook<G> {
        &self.recipes
    }

    /// Replaces the whole plan and drops every validation and cached recipe.
    #[tracing::instrument(skip_all, fields(session = %self.id))]
    pub async fn regenerate_plan(&mut self, preferences: &Preferences) -> Result<()> {
        let plan = self.planner.generate_plan(preferences).await?;

        self.plan = plan;
        self.validations.clear();
        self.recipes.clear();

        tracing::info!("plan replaced, validations and recipes reset");

        Ok(())
    }

    /// Replaces one day; validations of that day are dropped on success.
    ///
    /// Cached recipes are left alone: regenerated meals carry new names and
    /// miss the cache.
    #[tracing::instrument(skip_all, fields(session = %self.id, day_index = day_index))]
    pub async fn regenerate_day(&mut self, day_index: usize, preferences: &Preferences) -> Result<()> {
        let day = self
            .planner
            .regenerate_day(&self.plan, day_index, preferences)
            .await?;

        self.apply_day(DayRegeneration { day_index, day })
    }

    /// Generates a day without holding on to the session.
    ///
    /// The future works on a copy of the current plan, so several days can be
    /// in flight at once while the session stays usable. Each result goes
    /// back through [`PlanSession::apply_day`].
    pub fn day_regeneration(
        &self,
        day_index: usize,
        preferences: &Preferences,
    ) -> impl Future<Output = Result<DayRegeneration>> + use<G> {
        let planner = self.planner.clone();
        let plan = self.plan.clone();
        let preferences = preferences.clone();

        async move {
            let day = planner.regenerate_day(&plan, day_index, &preferences).await?;

            Ok(DayRegeneration { day_index, day })
        }
    }

    /// Splices a regenerated day into the current plan and drops that day's
    /// validations. Other days, including edits made meanwhile, are kept.
    pub fn apply_day(&mut self, regeneration: DayRegeneration) -> Result<()> {
        let DayRegeneration { day_index, day } = regeneration;
        self.plan = replace_day(&self.plan, day_index, day)?;
        self.validations.clear_day(day_index);

        tracing::info!(session = %self.id, day_index, "day replaced");

        Ok(())
    }

    /// Fasting windows cannot be deleted.
    pub fn delete_meal(&mut self, day_index: usize, meal_index: usize) -> Result<()> {
        self.plan
            .editable_meal(MealPosition::new(day_index, meal_index))?;
        self.plan = delete_meal(&self.plan, day_index, meal_index)?;

        tracing::debug!(session = %self.id, day_index, meal_index, "meal deleted");

        Ok(())
    }

    /// Fasting windows cannot be moved.
    pub fn move_meal(&mut self, from_day_index: usize, meal_index: usize, to_day_index: usize) -> Result<()> {
        self.plan
            .editable_meal(MealPosition::new(from_day_index, meal_index))?;
        self.plan = move_meal(&self.plan, from_day_index, meal_index, to_day_index)?;

        tracing::debug!(
            session = %self.id,
            from_day_index,
            meal_index,
            to_day_index,
            "meal moved"
        );

        Ok(())
    }

    pub fn reorder_meals(&mut self, day_index: usize, new_order: Vec<Meal>) -> Result<()> {
        self.plan = reorder_meals(&self.plan, day_index, new_order)?;

        Ok(())
    }

    pub fn toggle_validation(&mut self, position: MealPosition) -> Result<bool> {
        self.validations.toggle_meal(&self.plan, position)
    }

    /// Validates every editable meal of the day, or unvalidates them all
    /// when the day is already fully validated. Returns the new state.
    pub fn validate_all(&mut self, day_index: usize) -> Result<bool> {
        self.validations.validate_all_for_day(&self.plan, day_index)
    }

    pub fn is_day_fully_validated(&self, day_index: usize) -> bool {
        self.validations.is_day_fully_validated(&self.plan, day_index)
    }

    pub fn progress(&self) -> ValidationProgress {
        self.validations.progress(&self.plan)
    }

    pub async fn recipe_details(&self, position: MealPosition) -> Result<RecipeLookup> {
        self.recipes.details(&self.plan, position).await
    }

    pub async fn shopping_list(&self, weekly_budget: Option<f64>) -> Result<ShoppingReport> {
        self.shopping.build(&self.plan, weekly_budget).await
    }

    /// Hands the reduced snapshot to `store`; no generator call is made.
    pub async fn persist<S: PlanStore>(&self, store: &S) -> Result<String> {
        let snapshot = PlanSnapshot::from(&self.plan);
        let plan_id = store.persist_plan(&snapshot).await?;

        tracing::info!(
            session = %self.id,
            plan_id = %plan_id,
            meals = snapshot.meals.len(),
            "plan persisted"
        );

        Ok(plan_id)
    }
}
