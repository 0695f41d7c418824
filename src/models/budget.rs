//! Monthly budget goals
//!
//! Budget goals map each expense category to a monthly spending target. They
//! belong to a session and are never written to the transaction file.

use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Per-category monthly spending targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetGoals {
    goals: BTreeMap<Category, Money>,
}

impl BudgetGoals {
    /// Goals with no categories budgeted
    pub fn empty() -> Self {
        Self {
            goals: BTreeMap::new(),
        }
    }

    /// Build goals from (category, amount) pairs, validating each entry
    pub fn from_entries<I>(entries: I) -> Result<Self, BudgetValidationError>
    where
        I: IntoIterator<Item = (Category, Money)>,
    {
        let mut goals = Self::empty();
        for (category, amount) in entries {
            goals.set(category, amount)?;
        }
        Ok(goals)
    }

    /// Set the target for a category
    pub fn set(&mut self, category: Category, amount: Money) -> Result<(), BudgetValidationError> {
        if category.is_income() {
            return Err(BudgetValidationError::IncomeNotBudgetable);
        }
        if amount.is_negative() {
            return Err(BudgetValidationError::NegativeAmount { category, amount });
        }
        self.goals.insert(category, amount);
        Ok(())
    }

    /// Get the target for a category
    pub fn get(&self, category: Category) -> Option<Money> {
        self.goals.get(&category).copied()
    }

    /// Iterate over goals in category display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.goals.iter().map(|(c, m)| (*c, *m))
    }

    /// Number of budgeted categories
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Check if no category is budgeted
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Sum of all targets
    pub fn total(&self) -> Money {
        self.goals.values().sum()
    }
}

impl Default for BudgetGoals {
    fn default() -> Self {
        let defaults = [
            (Category::Housing, 1000),
            (Category::Food, 500),
            (Category::Transportation, 200),
            (Category::Utilities, 300),
            (Category::Entertainment, 200),
            (Category::Healthcare, 300),
            (Category::Other, 200),
        ];

        Self {
            goals: defaults
                .into_iter()
                .map(|(c, dollars)| (c, Money::from_dollars(dollars)))
                .collect(),
        }
    }
}

/// Validation errors for budget goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    IncomeNotBudgetable,
    NegativeAmount { category: Category, amount: Money },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncomeNotBudgetable => write!(f, "Income cannot have a budget goal"),
            Self::NegativeAmount { category, amount } => {
                write!(f, "Budget for {} cannot be negative (got {})", category, amount)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
