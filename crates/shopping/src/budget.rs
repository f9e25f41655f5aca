use serde::Serialize;
use strum::{AsRefStr, Display};

/// Differences smaller than a cent count as on budget.
const TOLERANCE: f64 = 0.005;

#[derive(AsRefStr, Display, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Under,
    OnBudget,
    Over,
}

/// `delta = total - budget`; negative means under budget.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct BudgetDelta {
    pub delta: f64,
    pub status: BudgetStatus,
}

impl BudgetDelta {
    /// Amount left to spend, zero when over budget.
    pub fn remaining(&self) -> f64 {
        (-self.delta).max(0.0)
    }
}

pub fn budget_delta(total_estimate: f64, weekly_budget: f64) -> BudgetDelta {
    let delta = total_estimate - weekly_budget;
    let status = if delta.abs() < TOLERANCE {
        BudgetStatus::OnBudget
    } else if delta < 0.0 {
        BudgetStatus::Under
    } else {
        BudgetStatus::Over
    };

    BudgetDelta { delta, status }
}
