//! Transaction model
//!
//! A transaction is a dated, categorized, amount-bearing record. Transactions
//! are immutable once stored; the only mutation the store offers is append.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (no time component)
    pub date: NaiveDate,

    /// Amount, always positive; direction comes from the category
    pub amount: Money,

    /// Category from the fixed set
    pub category: Category,

    /// Free-text label
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Check if this transaction is income
    pub fn is_income(&self) -> bool {
        self.category.is_income()
    }

    /// Check if this transaction counts as an expense
    pub fn is_expense(&self) -> bool {
        self.category.is_expense()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_transaction() {
        let txn = Transaction::new(date(2024, 1, 15), Money::from_cents(4250), Category::Food, "Groceries");
        assert!(txn.validate().is_ok());
        assert!(txn.is_expense());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let txn = Transaction::new(date(2024, 1, 15), Money::zero(), Category::Food, "Groceries");
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let txn = Transaction::new(date(2024, 1, 15), Money::from_cents(-100), Category::Food, "Refund");
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_blank_description_rejected() {
        let txn = Transaction::new(date(2024, 1, 15), Money::from_cents(100), Category::Other, "   ");
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyDescription));
    }

    #[test]
    fn test_file_format() {
        let txn = Transaction::new(date(2024, 1, 15), Money::from_cents(4250), Category::Food, "Groceries");
        let json = serde_json::to_string(&txn).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-01-15","amount":42.5,"category":"Food","description":"Groceries"}"#
        );

        let parsed: Transaction = serde_json::from_str(
            r#"{"date": "2024-01-15", "amount": 42.50, "category": "Food", "description": "Groceries"}"#,
        )
        .unwrap();
        assert_eq!(parsed, txn);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(date(2024, 3, 1), Money::from_dollars(1000), Category::Income, "Salary");
        assert_eq!(format!("{}", txn), "2024-03-01 Income Salary $1,000.00");
    }
}
