//! Core data models
//!
//! Transactions, the fixed category set, cents-based money, calendar months
//! and per-category budget goals.

pub mod budget;
pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{BudgetGoals, BudgetValidationError};
pub use category::{Category, CategoryParseError};
pub use money::{Money, MoneyParseError};
pub use period::{Month, PeriodParseError};
pub use transaction::{Transaction, TransactionValidationError};
