//! Local plan mutations.
//!
//! None of these consult the generator. Each returns a new plan with the
//! totals of every touched day recomputed, or rejects the call before
//! anything changes. Validation and recipe keys are positional and are not
//! renumbered here.

use nutriplan_shared::{
    Result,
    mealplan::{DayPlan, Meal, MealPosition, WeeklyPlan},
};

use crate::model::{check_day_index, recompute_day_total};

/// Removes the meal at `meal_index`; later meals of that day shift left.
///
/// Fasting slots are not refused here, callers that expose deletion to users
/// check [`WeeklyPlan::editable_meal`] first.
pub fn delete_meal(plan: &WeeklyPlan, day_index: usize, meal_index: usize) -> Result<WeeklyPlan> {
    plan.meal(MealPosition::new(day_index, meal_index))?;

    let mut updated = plan.clone();
    let mut day = std::mem::take(&mut updated.days[day_index]);
    let removed = day.meals.remove(meal_index);
    updated.days[day_index] = recompute_day_total(day);

    tracing::debug!(
        day_index,
        meal_index,
        meal = %removed.name,
        "deleted meal"
    );

    Ok(updated)
}

/// Replaces a day's meals with `new_order`, which must be a permutation of them.
pub fn reorder_meals(plan: &WeeklyPlan, day_index: usize, new_order: Vec<Meal>) -> Result<WeeklyPlan> {
    let day = plan.day(day_index)?;

    if !is_permutation(&day.meals, &new_order) {
        nutriplan_shared::precondition!(
            "new order for day {} is not a permutation of its {} meals",
            day_index,
            day.meals.len()
        );
    }

    let mut updated = plan.clone();
    let mut day = std::mem::take(&mut updated.days[day_index]);
    day.meals = new_order;
    updated.days[day_index] = recompute_day_total(day);

    Ok(updated)
}

/// Moves a meal to another day and re-sorts the destination by meal type.
///
/// Same-day moves of an existing meal return the plan unchanged. The sort is stable, so meals of
/// the same type keep their relative order.
pub fn move_meal(
    plan: &WeeklyPlan,
    from_day_index: usize,
    meal_index: usize,
    to_day_index: usize,
) -> Result<WeeklyPlan> {
    plan.meal(MealPosition::new(from_day_index, meal_index))?;
    check_day_index(plan, to_day_index)?;

    if from_day_index == to_day_index {
        return Ok(plan.clone());
    }

    let mut updated = plan.clone();

    let mut source = std::mem::take(&mut updated.days[from_day_index]);
    let meal = source.meals.remove(meal_index);
    updated.days[from_day_index] = recompute_day_total(source);

    tracing::debug!(
        from_day_index,
        meal_index,
        to_day_index,
        meal = %meal.name,
        "moved meal"
    );

    let mut destination = std::mem::take(&mut updated.days[to_day_index]);
    destination.meals.push(meal);
    destination.meals.sort_by_key(|m| m.meal_type);
    updated.days[to_day_index] = recompute_day_total(destination);

    Ok(updated)
}

/// Puts `day` in place of `plan.days[day_index]`, keeping the slot's label.
pub fn replace_day(plan: &WeeklyPlan, day_index: usize, day: DayPlan) -> Result<WeeklyPlan> {
    check_day_index(plan, day_index)?;

    let mut updated = plan.clone();
    let label = std::mem::take(&mut updated.days[day_index].day);
    updated.days[day_index] = recompute_day_total(DayPlan { day: label, ..day });

    Ok(updated)
}

fn is_permutation(original: &[Meal], candidate: &[Meal]) -> bool {
    if original.len() != candidate.len() {
        return false;
    }

    let mut used = vec![false; original.len()];

    candidate.iter().all(|meal| {
        let found = original
            .iter()
            .enumerate()
            .find(|(i, m)| !used[*i] && *m == meal)
            .map(|(i, _)| i);

        match found {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}
