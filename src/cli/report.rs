//! CLI commands for reports
//!
//! `insights` prints the summary, category breakdown and monthly trend.
//! `budget` compares a month's spending with the session's budget goals.

use clap::Args;

use crate::config::Settings;
use crate::display::report::separator;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetGoals, Category, Money, Month};
use crate::reports::{BudgetComparison, CategoryBreakdown, MonthlyTrend, SummaryTotals};
use crate::services::Session;
use crate::storage::Storage;

/// Arguments for `budget`
#[derive(Args, Debug, Default)]
pub struct BudgetArgs {
    /// Month to compare (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
    /// Override a goal for this run, e.g. `--set Food=650`
    #[arg(short, long = "set", value_name = "CATEGORY=AMOUNT")]
    pub overrides: Vec<String>,
}

/// Handle `insights`
pub fn handle_insights(storage: &Storage, settings: &Settings) -> TrackerResult<()> {
    let transactions = storage.transactions.all()?;
    if transactions.is_empty() {
        println!("No transactions available for analysis.");
        return Ok(());
    }

    let symbol = &settings.currency_symbol;

    println!("Financial Insights");
    println!("{}", separator(60));
    print!("{}", SummaryTotals::generate(&transactions).format_terminal(symbol));
    println!();
    print!("{}", CategoryBreakdown::generate(&transactions).format_terminal(symbol));
    println!();
    print!("{}", MonthlyTrend::generate(&transactions).format_terminal(symbol));

    Ok(())
}

/// Handle `budget`
pub fn handle_budget(
    storage: &Storage,
    settings: &Settings,
    session: &mut Session,
    args: BudgetArgs,
) -> TrackerResult<()> {
    if !args.overrides.is_empty() {
        let goals = apply_overrides(session.budget_goals(), &args.overrides)?;
        session.update_budget_goals(goals);
    }

    let month = match &args.month {
        Some(s) => Month::parse(s).map_err(|e| TrackerError::Validation(e.to_string()))?,
        None => Month::current(),
    };

    let transactions = storage.transactions.all()?;
    let comparison = BudgetComparison::generate(&transactions, session.budget_goals(), month);
    print!("{}", comparison.format_terminal(&settings.currency_symbol));

    Ok(())
}

/// Apply `Category=Amount` overrides on top of existing goals
pub fn apply_overrides(base: &BudgetGoals, overrides: &[String]) -> TrackerResult<BudgetGoals> {
    let mut goals = base.clone();

    for entry in overrides {
        let (name, amount) = entry.split_once('=').ok_or_else(|| {
            TrackerError::Validation(format!(
                "Invalid budget override '{}'. Use CATEGORY=AMOUNT",
                entry
            ))
        })?;
        let category = name
            .trim()
            .parse::<Category>()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        let amount = Money::parse(amount).map_err(|e| TrackerError::Validation(e.to_string()))?;
        goals
            .set(category, amount)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
    }

    Ok(goals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let goals = apply_overrides(
            &BudgetGoals::default(),
            &["Food=650".to_string(), "housing = 1,200".to_string()],
        )
        .unwrap();

        assert_eq!(goals.get(Category::Food), Some(Money::from_dollars(650)));
        assert_eq!(goals.get(Category::Housing), Some(Money::from_dollars(1200)));
        assert_eq!(goals.get(Category::Other), Some(Money::from_dollars(200)));
    }

    #[test]
    fn test_apply_overrides_rejects_bad_entries() {
        let base = BudgetGoals::default();
        for bad in ["Food", "Income=100", "Food=-5", "Snacks=10", "Food=lots"] {
            let err = apply_overrides(&base, &[bad.to_string()]).unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", bad);
        }
    }
}
