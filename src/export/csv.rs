//! CSV Export functionality
//!
//! Writes a history listing as spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::TrackerResult;
use crate::models::Transaction;

/// Column headers, in output order
pub const CSV_HEADERS: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// Export transactions to CSV in the order given
///
/// Dates are ISO-8601 and amounts are plain decimals with two places, so
/// the output re-imports cleanly into a spreadsheet.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for txn in transactions {
        csv_writer.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.category.name().to_string(),
            txn.description.clone(),
            format!("{:.2}", txn.amount.to_decimal()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn txn(d: u32, cents: i64, category: Category, desc: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            Money::from_cents(cents),
            category,
            desc,
        )
    }

    #[test]
    fn test_export_header_only_when_empty() {
        let mut output = Vec::new();
        export_transactions_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Date,Category,Description,Amount\n");
    }

    #[test]
    fn test_export_rows() {
        let mut output = Vec::new();
        export_transactions_csv(
            &[
                txn(5, 20_000, Category::Food, "Groceries"),
                txn(1, 4_250, Category::Entertainment, "Movies, snacks"),
            ],
            &mut output,
        )
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-03-05,Food,Groceries,200.00");
        assert_eq!(lines[2], "2024-03-01,Entertainment,\"Movies, snacks\",42.50");
    }
}
