//! Monthly Trend
//!
//! Buckets every transaction by calendar month. Income is included in each
//! bucket's total; the trend line has always been drawn that way.

use std::collections::BTreeMap;

use crate::display::report::format_bar;
use crate::models::{Money, Month, Transaction};

/// Total for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: Money,
}

/// Chronological month-by-month totals
///
/// Months between the first and last transaction that have no transactions
/// appear with a zero total, so the series has no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyTrend {
    pub points: Vec<MonthlyTotal>,
}

impl MonthlyTrend {
    /// Sum all transaction amounts per calendar month
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut buckets: BTreeMap<Month, Money> = BTreeMap::new();
        for txn in transactions {
            *buckets.entry(Month::of(txn.date)).or_default() += txn.amount;
        }

        let (first, last) = match (buckets.keys().next(), buckets.keys().next_back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Self::default(),
        };

        let mut points = Vec::new();
        let mut month = first;
        while month <= last {
            points.push(MonthlyTotal {
                month,
                total: buckets.get(&month).copied().unwrap_or_default(),
            });
            month = month.next();
        }

        Self { points }
    }

    /// Check if there are no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total for a given month, if it is within the series
    pub fn get(&self, month: Month) -> Option<Money> {
        self.points
            .iter()
            .find(|p| p.month == month)
            .map(|p| p.total)
    }

    /// Largest monthly total
    pub fn max_total(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.total)
            .max()
            .unwrap_or_default()
    }

    /// Format the trend for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Spending Trend\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No transactions recorded.\n");
            return output;
        }

        let max = self.max_total().cents() as f64;
        for point in &self.points {
            output.push_str(&format!(
                "{}  {:>14}  {}\n",
                point.month,
                point.total.format_with_symbol(symbol),
                format_bar(point.total.cents() as f64, max, 30)
            ));
        }

        output
    }
}
