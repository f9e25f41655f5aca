use std::{
    ops::Deref,
    sync::{Arc, Mutex, MutexGuard},
};

use nutriplan_shared::{
    Error, Gateway, GenerationSettings, Result, SingleFlight, gateway,
    mealplan::{MealPosition, WeeklyPlan},
    recipe::RecipeDetails,
};

use crate::{RecipeCache, RecipeKey, fallback_recipe};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipeSource {
    Cached,
    Generated,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecipeLookup {
    pub details: RecipeDetails,
    pub source: RecipeSource,
}

/// On-demand recipe details for plan meals, cached per [`RecipeKey`].
///
/// Clones share the cache and the in-flight set.
pub struct RecipeBook<G: Gateway> {
    gateway: Arc<G>,
    settings: GenerationSettings,
    cache: Arc<Mutex<RecipeCache>>,
    generating: SingleFlight<RecipeKey>,
}

impl<G: Gateway> Clone for RecipeBook<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            settings: self.settings.clone(),
            cache: self.cache.clone(),
            generating: self.generating.clone(),
        }
    }
}

impl<G: Gateway> Deref for RecipeBook<G> {
    type Target = GenerationSettings;

    fn deref(&self) -> &Self::Target {
        &self.settings
    }
}

impl<G: Gateway> RecipeBook<G> {
    pub fn new(gateway: Arc<G>, settings: GenerationSettings) -> Self {
        Self {
            gateway,
            settings,
            cache: Arc::default(),
            generating: SingleFlight::new(),
        }
    }

    /// Details for the meal at `position`.
    ///
    /// A cache hit never reaches the gateway. Generator failures and
    /// recipes below the configured minimums resolve to
    /// [`fallback_recipe`], which is returned but not cached so a later
    /// request tries again. Fasting windows have no recipe.
    #[tracing::instrument(skip_all, fields(position = %position))]
    pub async fn details(&self, plan: &WeeklyPlan, position: MealPosition) -> Result<RecipeLookup> {
        let meal = plan.editable_meal(position)?;
        let key = RecipeKey {
            position,
            name: meal.name.clone(),
        };

        if let Some(details) = self.cached(&key) {
            tracing::debug!(key = %key, "recipe cache hit");
            return Ok(RecipeLookup {
                details,
                source: RecipeSource::Cached,
            });
        }

        let _guard = self.generating.try_acquire(key.clone())?;

        let generated = gateway::call(
            self.timeout,
            "generate recipe details",
            self.gateway.generate_recipe_details(meal),
        )
        .await
        .and_then(|details| {
            if details.is_usable(self.min_ingredients, self.min_instructions) {
                Ok(details)
            } else {
                Err(Error::EmptyResult(format!(
                    "{} ingredients, {} instructions",
                    details.ingredients.len(),
                    details.instructions.len()
                )))
            }
        });

        match generated {
            Ok(details) => {
                self.lock().insert(key.clone(), details.clone());
                tracing::info!(key = %key, "cached recipe details");

                Ok(RecipeLookup {
                    details,
                    source: RecipeSource::Generated,
                })
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "using fallback recipe");

                Ok(RecipeLookup {
                    details: fallback_recipe(meal),
                    source: RecipeSource::Fallback,
                })
            }
        }
    }

    pub fn cached(&self, key: &RecipeKey) -> Option<RecipeDetails> {
        self.lock().get_key(key).cloned()
    }

    pub fn is_generating(&self, key: &RecipeKey) -> bool {
        self.generating.is_in_flight(key)
    }

    pub fn cached_count(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, RecipeCache> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
