//! Insight engine
//!
//! Pure functions over a snapshot of the transaction sequence: history
//! filtering, summary totals, the category breakdown, the monthly trend and
//! budget vs. actual. Each report has a `generate` constructor and a
//! `format_terminal` renderer for the command line.

pub mod breakdown;
pub mod budget;
pub mod history;
pub mod summary;
pub mod trend;

pub use breakdown::{CategoryBreakdown, CategorySlice};
pub use budget::{BudgetComparison, BudgetRow};
pub use history::{categories_present, date_bounds, HistoryFilter, HistoryView};
pub use summary::SummaryTotals;
pub use trend::{MonthlyTotal, MonthlyTrend};
