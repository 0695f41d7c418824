//! Transaction History
//!
//! Filters the transaction sequence by category and inclusive date range and
//! orders the result newest first.

use chrono::NaiveDate;

use crate::models::{Category, Transaction};

/// Options for filtering transaction history
///
/// All set filters must match (boolean AND). Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Only transactions in this category
    pub category: Option<Category>,
    /// Only transactions on or after this date
    pub start_date: Option<NaiveDate>,
    /// Only transactions on or before this date
    pub end_date: Option<NaiveDate>,
}

impl HistoryFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Check whether a transaction passes every set filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.category.map_or(true, |c| txn.category == c)
            && self.start_date.map_or(true, |start| txn.date >= start)
            && self.end_date.map_or(true, |end| txn.date <= end)
    }
}

/// Result of a history query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// The store holds no transactions at all
    NoData,
    /// Matching transactions, newest first (may be empty)
    Transactions(Vec<Transaction>),
}

impl HistoryView {
    /// Apply a filter to a snapshot of the transaction sequence
    ///
    /// The sort is stable, so transactions sharing a date keep their
    /// insertion order.
    pub fn generate(transactions: &[Transaction], filter: &HistoryFilter) -> Self {
        if transactions.is_empty() {
            return Self::NoData;
        }

        let mut rows: Vec<Transaction> = transactions
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));

        Self::Transactions(rows)
    }

    /// Matching transactions, empty for `NoData`
    pub fn transactions(&self) -> &[Transaction] {
        match self {
            Self::NoData => &[],
            Self::Transactions(rows) => rows,
        }
    }

    /// Check if the store was empty
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Earliest and latest transaction dates, used as the default date range
pub fn date_bounds(transactions: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let min = transactions.iter().map(|t| t.date).min()?;
    let max = transactions.iter().map(|t| t.date).max()?;
    Some((min, max))
}

/// Categories that occur in the data, in display order
pub fn categories_present(transactions: &[Transaction]) -> Vec<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|c| transactions.iter().any(|t| t.category == *c))
        .collect()
}
