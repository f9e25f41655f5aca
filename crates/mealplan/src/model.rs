use nutriplan_shared::{
    GenerationSettings,
    mealplan::{DAYS_PER_WEEK, DayPlan, WeeklyPlan, sum_calories},
};

/// Returns `day` with `total_calories` recomputed from its meals.
pub fn recompute_day_total(day: DayPlan) -> DayPlan {
    let total_calories = sum_calories(day.meals.iter().map(|m| m.calories));

    DayPlan {
        total_calories,
        ..day
    }
}

pub fn normalize_plan(plan: WeeklyPlan) -> WeeklyPlan {
    WeeklyPlan {
        days: plan.days.into_iter().map(recompute_day_total).collect(),
    }
}

/// Indices of days whose stored total disagrees with their meals.
pub fn stale_days(plan: &WeeklyPlan) -> Vec<usize> {
    plan.days
        .iter()
        .enumerate()
        .filter(|(_, d)| d.total_calories != sum_calories(d.meals.iter().map(|m| m.calories)))
        .map(|(i, _)| i)
        .collect()
}

pub fn check_day_index(plan: &WeeklyPlan, day_index: usize) -> nutriplan_shared::Result<()> {
    plan.day(day_index).map(|_| ())
}

pub(crate) fn ensure_usable_day(
    day: &DayPlan,
    settings: &GenerationSettings,
) -> nutriplan_shared::Result<()> {
    if day.meals.len() < settings.min_meals_per_day {
        nutriplan_shared::empty!(
            "day '{}' has {} meals, expected at least {}",
            day.day,
            day.meals.len(),
            settings.min_meals_per_day
        );
    }

    if day.meals.iter().any(|m| !m.is_fasting && m.name.trim().is_empty()) {
        nutriplan_shared::empty!("day '{}' contains a meal without a name", day.day);
    }

    Ok(())
}

pub(crate) fn ensure_usable_plan(
    plan: &WeeklyPlan,
    settings: &GenerationSettings,
) -> nutriplan_shared::Result<()> {
    if plan.days.len() != DAYS_PER_WEEK {
        nutriplan_shared::empty!(
            "plan has {} days, expected {}",
            plan.days.len(),
            DAYS_PER_WEEK
        );
    }

    for day in plan.days.iter() {
        ensure_usable_day(day, settings)?;
    }

    Ok(())
}
