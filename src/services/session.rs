//! Session state
//!
//! Holds the values that live only as long as one dashboard run or one CLI
//! invocation. Budget goals are never written to disk.

use tracing::debug;

use crate::models::BudgetGoals;

/// Per-run state shared by the presentation layer
#[derive(Debug, Clone, Default)]
pub struct Session {
    budget_goals: Option<BudgetGoals>,
}

impl Session {
    /// Create an empty session; goals are created on first access
    pub fn new() -> Self {
        Self::default()
    }

    /// Current budget goals, initialized to the defaults on first access
    pub fn budget_goals(&mut self) -> &BudgetGoals {
        self.budget_goals.get_or_insert_with(|| {
            debug!("Initializing session budget goals with defaults");
            BudgetGoals::default()
        })
    }

    /// Replace the budget goals wholesale
    pub fn update_budget_goals(&mut self, goals: BudgetGoals) {
        debug!(categories = goals.len(), "Updating session budget goals");
        self.budget_goals = Some(goals);
    }
}
