//! Summary totals
//!
//! Income, expenses and net savings across the whole transaction sequence.

use crate::models::{Money, Transaction};

/// Headline figures for the insights page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryTotals {
    /// Sum of Income transactions
    pub total_income: Money,
    /// Sum of every non-Income transaction
    pub total_expenses: Money,
    /// Income minus expenses (negative when overspent)
    pub net_savings: Money,
}

impl SummaryTotals {
    /// Compute totals; an empty sequence yields all zeros
    pub fn generate(transactions: &[Transaction]) -> Self {
        let total_income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let total_expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        Self {
            total_income,
            total_expenses,
            net_savings: total_income - total_expenses,
        }
    }

    /// Format the totals for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        format!(
            "Total Income:   {:>14}\nTotal Expenses: {:>14}\nNet Savings:    {:>14}\n",
            self.total_income.format_with_symbol(symbol),
            self.total_expenses.format_with_symbol(symbol),
            self.net_savings.format_with_symbol(symbol),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn txn(cents: i64, category: Category) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Money::from_cents(cents),
            category,
            "test",
        )
    }

    #[test]
    fn test_empty_is_zero() {
        let totals = SummaryTotals::generate(&[]);
        assert_eq!(totals, SummaryTotals::default());
        assert!(totals.net_savings.is_zero());
    }

    #[test]
    fn test_income_and_expenses_split() {
        let totals = SummaryTotals::generate(&[
            txn(100_000, Category::Income),
            txn(20_000, Category::Food),
            txn(5_050, Category::Healthcare),
        ]);

        assert_eq!(totals.total_income.cents(), 100_000);
        assert_eq!(totals.total_expenses.cents(), 25_050);
        assert_eq!(totals.net_savings.cents(), 74_950);
    }

    #[test]
    fn test_net_savings_can_be_negative() {
        let totals = SummaryTotals::generate(&[txn(1_000, Category::Income), txn(3_000, Category::Housing)]);
        assert_eq!(totals.net_savings, totals.total_income - totals.total_expenses);
        assert_eq!(totals.net_savings.cents(), -2_000);
    }

    #[test]
    fn test_format_terminal() {
        let totals = SummaryTotals::generate(&[txn(100_000, Category::Income), txn(20_000, Category::Food)]);
        let output = totals.format_terminal("$");
        assert!(output.contains("$1,000.00"));
        assert!(output.contains("$200.00"));
        assert!(output.contains("$800.00"));
    }
}
