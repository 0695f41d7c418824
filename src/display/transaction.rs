//! Transaction display formatting
//!
//! Renders history rows as a terminal table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_date, truncate};
use crate::models::Transaction;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table, one row per transaction in the given order
pub fn format_transaction_table(
    transactions: &[Transaction],
    date_format: &str,
    symbol: &str,
) -> String {
    let rows = transactions.iter().map(|txn| TransactionRow {
        date: format_date(txn.date, date_format),
        category: txn.category.name(),
        description: truncate(&txn.description, DESCRIPTION_WIDTH),
        amount: txn.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_table_contains_fields() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            Money::from_cents(123_456),
            Category::Housing,
            "Rent",
        );
        let table = format_transaction_table(&[txn], "%Y-%m-%d", "$");

        assert!(table.contains("Date"));
        assert!(table.contains("2024-03-05"));
        assert!(table.contains("Housing"));
        assert!(table.contains("Rent"));
        assert!(table.contains("$1,234.56"));
    }

    #[test]
    fn test_custom_date_format() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            Money::from_dollars(1),
            Category::Other,
            "x",
        );
        let table = format_transaction_table(&[txn], "%d/%m/%Y", "€");
        assert!(table.contains("05/03/2024"));
        assert!(table.contains("€1.00"));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            Money::from_dollars(1),
            Category::Other,
            "x",
        );
        let table = format_transaction_table(&[txn], "%Q", "$");
        assert!(table.contains("2024-03-05"));
    }
}
