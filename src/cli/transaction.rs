//! Transaction CLI commands
//!
//! `add` and `history`, plus the history filter arguments shared with
//! `export`.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::display::report::format_date;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Transaction};
use crate::reports::{date_bounds, HistoryFilter, HistoryView};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g., "42.50" or "$1,200")
    pub amount: String,
    /// Category (Income, Housing, Food, Transportation, Utilities,
    /// Entertainment, Healthcare, Other)
    pub category: String,
    /// Description
    pub description: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// History filter arguments
#[derive(Args, Debug, Default)]
pub struct HistoryArgs {
    /// Only show this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Start date (YYYY-MM-DD), defaults to the earliest transaction
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), defaults to the latest transaction
    #[arg(long)]
    pub to: Option<String>,
}

impl HistoryArgs {
    /// Build a filter, filling an unset bound from the data's date range
    pub fn to_filter(&self, transactions: &[Transaction]) -> TrackerResult<HistoryFilter> {
        let mut filter = HistoryFilter::new();

        if let Some(name) = &self.category {
            let category = name
                .parse::<Category>()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;
            filter = filter.category(category);
        }

        if let Some((min, max)) = date_bounds(transactions) {
            let start = match &self.from {
                Some(s) => parse_date(s)?,
                None => min,
            };
            let end = match &self.to {
                Some(s) => parse_date(s)?,
                None => max,
            };
            filter = filter.date_range(start, end);
        }

        Ok(filter)
    }
}

fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Handle `add`
pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> TrackerResult<()> {
    let service = TransactionService::new(storage);

    let input = CreateTransactionInput::parse(
        args.date.as_deref().unwrap_or(""),
        &args.amount,
        &args.category,
        &args.description,
    )?;
    let txn = service.create(input)?;

    println!("Transaction added successfully!");
    println!(
        "  {}  {}  {}  {}",
        format_date(txn.date, &settings.date_format),
        txn.category,
        txn.description,
        txn.amount.format_with_symbol(&settings.currency_symbol)
    );

    Ok(())
}

/// Handle `history`
pub fn handle_history(
    storage: &Storage,
    settings: &Settings,
    args: HistoryArgs,
) -> TrackerResult<()> {
    let service = TransactionService::new(storage);
    let transactions = service.list()?;
    let filter = args.to_filter(&transactions)?;

    match service.history(&filter)? {
        HistoryView::NoData => println!("No transactions recorded yet."),
        HistoryView::Transactions(rows) if rows.is_empty() => {
            println!("No transactions match the selected filters.")
        }
        HistoryView::Transactions(rows) => {
            println!(
                "{}",
                format_transaction_table(&rows, &settings.date_format, &settings.currency_symbol)
            );
            println!("{} transaction(s)", rows.len());
        }
    }

    Ok(())
}
