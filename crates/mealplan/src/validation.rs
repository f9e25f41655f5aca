use std::collections::HashSet;

use nutriplan_shared::{
    Result,
    mealplan::{MealPosition, WeeklyPlan, sum_calories},
};

/// Meals the user confirmed they will eat, keyed by position.
///
/// Keys are not renumbered when meals are deleted, moved or reordered; a key
/// keeps pointing at whatever meal now occupies that slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationTracker {
    validated: HashSet<MealPosition>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationProgress {
    pub validated: usize,
    pub total: usize,
}

impl ValidationProgress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.validated == self.total
    }
}

impl ValidationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `key` and returns whether it is now validated.
    pub fn toggle(&mut self, key: MealPosition) -> bool {
        if self.validated.remove(&key) {
            false
        } else {
            self.validated.insert(key);
            true
        }
    }

    /// [`ValidationTracker::toggle`] for a meal that must exist and not be a fasting window.
    pub fn toggle_meal(&mut self, plan: &WeeklyPlan, key: MealPosition) -> Result<bool> {
        plan.editable_meal(key)?;

        Ok(self.toggle(key))
    }

    pub fn is_validated(&self, key: MealPosition) -> bool {
        self.validated.contains(&key)
    }

    /// True iff the day has non-fasting meals and all of them are validated.
    pub fn is_day_fully_validated(&self, plan: &WeeklyPlan, day_index: usize) -> bool {
        let Ok(day) = plan.day(day_index) else {
            return false;
        };

        let mut indices = day.editable_meal_indices().peekable();
        if indices.peek().is_none() {
            return false;
        }

        indices.all(|meal| self.is_validated(MealPosition::new(day_index, meal)))
    }

    /// Unvalidates every non-fasting meal of the day if all were validated,
    /// otherwise validates all of them. Returns whether the day is now validated.
    pub fn validate_all_for_day(&mut self, plan: &WeeklyPlan, day_index: usize) -> Result<bool> {
        let day = plan.day(day_index)?;
        let keys = day
            .editable_meal_indices()
            .map(|meal| MealPosition::new(day_index, meal))
            .collect::<Vec<_>>();

        if self.is_day_fully_validated(plan, day_index) {
            for key in keys.iter() {
                self.validated.remove(key);
            }

            tracing::debug!(day_index, meals = keys.len(), "unvalidated day");

            return Ok(false);
        }

        let validated = !keys.is_empty();
        self.validated.extend(keys);

        tracing::debug!(day_index, "validated day");

        Ok(validated)
    }

    pub fn clear_day(&mut self, day_index: usize) {
        self.validated.retain(|key| key.day != day_index);
    }

    pub fn clear(&mut self) {
        self.validated.clear();
    }

    pub fn len(&self) -> usize {
        self.validated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validated.is_empty()
    }

    /// Validated keys in day, then meal order.
    pub fn keys(&self) -> Vec<MealPosition> {
        let mut keys = self.validated.iter().copied().collect::<Vec<_>>();
        keys.sort();
        keys
    }

    pub fn keys_for_day(&self, day_index: usize) -> Vec<MealPosition> {
        self.keys()
            .into_iter()
            .filter(|key| key.day == day_index)
            .collect()
    }

    /// Counts only keys that still point at a non-fasting meal of the plan.
    pub fn progress(&self, plan: &WeeklyPlan) -> ValidationProgress {
        let mut progress = ValidationProgress::default();

        for (day_index, day) in plan.days.iter().enumerate() {
            for meal in day.editable_meal_indices() {
                progress.total += 1;
                if self.is_validated(MealPosition::new(day_index, meal)) {
                    progress.validated += 1;
                }
            }
        }

        progress
    }

    pub fn validated_calories(&self, plan: &WeeklyPlan, day_index: usize) -> u32 {
        let Ok(day) = plan.day(day_index) else {
            return 0;
        };

        sum_calories(
            day.meals
                .iter()
                .enumerate()
                .filter(|(meal, m)| !m.is_fasting && self.is_validated(MealPosition::new(day_index, *meal)))
                .map(|(_, m)| m.calories),
        )
    }
}
