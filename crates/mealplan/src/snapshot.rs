use async_trait::async_trait;
use nutriplan_shared::mealplan::{MealType, WeeklyPlan};
use serde::{Deserialize, Serialize};

/// Reduced projection of a plan kept for later feedback collection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    pub meals: Vec<SnapshotMeal>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeal {
    pub day: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    pub calories: u32,
    pub proteins: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
}

impl From<&WeeklyPlan> for PlanSnapshot {
    fn from(plan: &WeeklyPlan) -> Self {
        let meals = plan
            .days
            .iter()
            .flat_map(|day| {
                day.meals
                    .iter()
                    .filter(|m| !m.is_fasting)
                    .map(move |m| SnapshotMeal {
                        day: day.day.to_owned(),
                        meal_type: m.meal_type,
                        name: m.name.to_owned(),
                        calories: m.calories,
                        proteins: m.proteins,
                        recipe_id: m.recipe_id.to_owned(),
                    })
            })
            .collect();

        Self { meals }
    }
}

/// Stores snapshots; returns the id of the stored plan.
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn persist_plan(&self, snapshot: &PlanSnapshot) -> anyhow::Result<String>;
}
