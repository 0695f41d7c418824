//! Budget vs. Actual
//!
//! Compares one month's spending per category against the session's budget
//! goals.

use std::collections::HashMap;

use crate::models::{BudgetGoals, Category, Money, Month, Transaction};

/// One budgeted category's comparison row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRow {
    pub category: Category,
    pub budget: Money,
    pub actual: Money,
    /// `budget - actual`; negative when overspent
    pub remaining: Money,
}

impl BudgetRow {
    /// Check if spending exceeded the goal
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Fraction of the goal spent, as a percentage
    pub fn percent_used(&self) -> f64 {
        if self.budget.is_zero() {
            if self.actual.is_zero() {
                0.0
            } else {
                100.0
            }
        } else {
            (self.actual.cents() as f64 / self.budget.cents() as f64) * 100.0
        }
    }
}

/// Budget vs. actual for a single calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetComparison {
    pub month: Month,
    /// One row per budgeted category, in goal order
    pub rows: Vec<BudgetRow>,
}

impl BudgetComparison {
    /// Compare `month`'s non-Income spending with `goals`
    ///
    /// Only budgeted categories get a row. A budgeted category without
    /// transactions in the month reports zero actual spending.
    pub fn generate(transactions: &[Transaction], goals: &BudgetGoals, month: Month) -> Self {
        let mut actual_by_category: HashMap<Category, Money> = HashMap::new();
        for txn in transactions
            .iter()
            .filter(|t| t.is_expense() && month.contains(t.date))
        {
            *actual_by_category.entry(txn.category).or_default() += txn.amount;
        }

        let rows = goals
            .iter()
            .map(|(category, budget)| {
                let actual = actual_by_category
                    .get(&category)
                    .copied()
                    .unwrap_or_default();
                BudgetRow {
                    category,
                    budget,
                    actual,
                    remaining: budget - actual,
                }
            })
            .collect();

        Self { month, rows }
    }

    /// Compare the current calendar month
    pub fn for_current_month(transactions: &[Transaction], goals: &BudgetGoals) -> Self {
        Self::generate(transactions, goals, Month::current())
    }

    /// Row for a category, if it is budgeted
    pub fn get(&self, category: Category) -> Option<&BudgetRow> {
        self.rows.iter().find(|r| r.category == category)
    }

    /// Sum of all goals
    pub fn total_budget(&self) -> Money {
        self.rows.iter().map(|r| r.budget).sum()
    }

    /// Sum of all actual spending in budgeted categories
    pub fn total_actual(&self) -> Money {
        self.rows.iter().map(|r| r.actual).sum()
    }

    /// Format the comparison for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget vs. Actual Spending: {}\n", self.month));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>15} {:>15} {:>15}\n",
            "Category", "Budget", "Actual", "Remaining"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.is_over_budget() { " !" } else { "" };
            output.push_str(&format!(
                "{:<15} {:>15} {:>15} {:>15}{}\n",
                row.category.name(),
                row.budget.format_with_symbol(symbol),
                row.actual.format_with_symbol(symbol),
                row.remaining.format_with_symbol(symbol),
                marker
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        let total_budget = self.total_budget();
        let total_actual = self.total_actual();
        output.push_str(&format!(
            "{:<15} {:>15} {:>15} {:>15}\n",
            "TOTAL",
            total_budget.format_with_symbol(symbol),
            total_actual.format_with_symbol(symbol),
            (total_budget - total_actual).format_with_symbol(symbol)
        ));

        output
    }
}
