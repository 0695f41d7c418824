//! Transaction service
//!
//! Turns raw form or command-line input into validated transactions and
//! answers history queries against the store.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money, Transaction};
use crate::reports::{HistoryFilter, HistoryView};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionInput {
    /// Defaults to today when unset
    pub date: Option<NaiveDate>,
    pub amount: Money,
    pub category: Category,
    pub description: String,
}

impl CreateTransactionInput {
    /// Parse the raw text fields of the entry form
    ///
    /// An empty date means today. Amount accepts `$` and thousands
    /// separators. Category matching is case-insensitive.
    pub fn parse(
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
    ) -> TrackerResult<Self> {
        let date = date.trim();
        let date = if date.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                    TrackerError::Validation(format!(
                        "Invalid date '{}'. Use YYYY-MM-DD format",
                        date
                    ))
                })?,
            )
        };

        let amount =
            Money::parse(amount).map_err(|e| TrackerError::Validation(e.to_string()))?;
        let category = category
            .parse::<Category>()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        Ok(Self {
            date,
            amount,
            category,
            description: description.to_string(),
        })
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> TrackerResult<Transaction> {
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let txn = Transaction::new(
            date,
            input.amount,
            input.category,
            input.description.trim(),
        );

        self.storage.transactions.add(txn.clone())?;

        info!(
            date = %txn.date,
            category = %txn.category,
            amount = %txn.amount,
            "Transaction added"
        );

        Ok(txn)
    }

    /// All transactions in insertion order
    pub fn list(&self) -> TrackerResult<Vec<Transaction>> {
        self.storage.transactions.all()
    }

    /// Filtered history, newest first
    pub fn history(&self, filter: &HistoryFilter) -> TrackerResult<HistoryView> {
        let transactions = self.storage.transactions.all()?;
        let view = HistoryView::generate(&transactions, filter);
        debug!(
            total = transactions.len(),
            matched = view.transactions().len(),
            "History query"
        );
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_parse_input() {
        let input = CreateTransactionInput::parse("2024-03-01", "$1,000", "income", "Salary").unwrap();
        assert_eq!(input.date, Some(date(3, 1)));
        assert_eq!(input.amount, Money::from_dollars(1000));
        assert_eq!(input.category, Category::Income);
        assert_eq!(input.description, "Salary");
    }

    #[test]
    fn test_parse_empty_date_is_none() {
        let input = CreateTransactionInput::parse("  ", "12.50", "Food", "Lunch").unwrap();
        assert_eq!(input.date, None);
    }

    #[test]
    fn test_parse_rejects_bad_fields() {
        assert!(CreateTransactionInput::parse("03/01/2024", "1", "Food", "x")
            .unwrap_err()
            .is_validation());
        assert!(CreateTransactionInput::parse("", "abc", "Food", "x")
            .unwrap_err()
            .is_validation());
        assert!(CreateTransactionInput::parse("", "1", "Groceries", "x")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_create_defaults_date_to_today() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let input = CreateTransactionInput::parse("", "5", "Other", "Coffee").unwrap();
        let txn = service.create(input).unwrap();

        assert_eq!(txn.date, Local::now().date_naive());
        assert_eq!(service.list().unwrap(), vec![txn]);
    }

    #[test]
    fn test_create_trims_description() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let input = CreateTransactionInput::parse("2024-03-01", "5", "Other", "  Coffee  ").unwrap();
        let txn = service.create(input).unwrap();
        assert_eq!(txn.description, "Coffee");
    }

    #[test]
    fn test_create_rejects_invalid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let zero = CreateTransactionInput::parse("2024-03-01", "0", "Food", "Nothing").unwrap();
        assert!(service.create(zero).unwrap_err().is_validation());

        let blank = CreateTransactionInput::parse("2024-03-01", "10", "Food", "   ").unwrap();
        assert!(service.create(blank).unwrap_err().is_validation());

        assert!(service.list().unwrap().is_empty());
        assert!(!storage.transactions.path().exists());
    }

    #[test]
    fn test_history() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        assert!(service.history(&HistoryFilter::new()).unwrap().is_no_data());

        for (d, amount, cat, desc) in [
            ("2024-03-01", "1000", "Income", "Salary"),
            ("2024-03-05", "200", "Food", "Groceries"),
        ] {
            service
                .create(CreateTransactionInput::parse(d, amount, cat, desc).unwrap())
                .unwrap();
        }

        let view = service
            .history(&HistoryFilter::new().category(Category::Food))
            .unwrap();
        assert_eq!(view.transactions().len(), 1);
        assert_eq!(view.transactions()[0].description, "Groceries");
    }

    #[test]
    fn test_huge_amounts_are_rejected_and_totals_stay_sane() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        assert!(
            CreateTransactionInput::parse("2024-03-01", "90000000000000000", "Food", "Yacht")
                .unwrap_err()
                .is_validation()
        );

        for _ in 0..2 {
            let input =
                CreateTransactionInput::parse("2024-03-01", "999,999,999.99", "Food", "Yacht").unwrap();
            service.create(input).unwrap();
        }

        let totals = crate::reports::SummaryTotals::generate(&service.list().unwrap());
        assert_eq!(totals.total_expenses, Money::MAX + Money::MAX);
        assert_eq!(totals.net_savings, -(Money::MAX + Money::MAX));
    }
}
