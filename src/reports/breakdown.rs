//! Category Breakdown
//!
//! Groups expenses by category for the proportional "where did it go" view.

use std::collections::BTreeMap;

use crate::display::report::{format_bar, format_percentage};
use crate::models::{Category, Money, Transaction};

/// One category's share of expenses
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// Expense category
    pub category: Category,
    /// Total spent in this category
    pub total: Money,
    /// Number of transactions
    pub transaction_count: usize,
    /// Percentage of total expenses
    pub percentage: f64,
}

/// Expenses grouped by category
///
/// Income never appears, and neither does a category without transactions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    /// Slices in category display order
    pub slices: Vec<CategorySlice>,
    /// Total of all slices
    pub total_expenses: Money,
}

impl CategoryBreakdown {
    /// Group non-Income transactions by category
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut by_category: BTreeMap<Category, (Money, usize)> = BTreeMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let entry = by_category
                .entry(txn.category)
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let total_expenses: Money = by_category.values().map(|(m, _)| *m).sum();

        let slices = by_category
            .into_iter()
            .filter(|(_, (total, _))| !total.is_zero())
            .map(|(category, (total, transaction_count))| {
                let percentage = if total_expenses.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / total_expenses.cents() as f64) * 100.0
                };
                CategorySlice {
                    category,
                    total,
                    transaction_count,
                    percentage,
                }
            })
            .collect();

        Self {
            slices,
            total_expenses,
        }
    }

    /// Check if there is nothing to chart
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total for a category, if it has a slice
    pub fn get(&self, category: Category) -> Option<Money> {
        self.slices
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.total)
    }

    /// Slices ordered by amount, largest first
    pub fn largest_first(&self) -> Vec<&CategorySlice> {
        let mut slices: Vec<_> = self.slices.iter().collect();
        slices.sort_by(|a, b| b.total.cmp(&a.total));
        slices
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Expenses by Category\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        let max = self
            .slices
            .iter()
            .map(|s| s.total.cents())
            .max()
            .unwrap_or(0) as f64;

        for slice in self.largest_first() {
            output.push_str(&format!(
                "{:<15} {:>14} {:>6}  {}\n",
                slice.category.name(),
                slice.total.format_with_symbol(symbol),
                format_percentage(slice.percentage),
                format_bar(slice.total.cents() as f64, max, 20)
            ));
        }

        output
    }
}
