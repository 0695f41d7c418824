//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod report;
pub mod transaction;

pub use export::{handle_export, ExportArgs};
pub use report::{handle_budget, handle_insights, BudgetArgs};
pub use transaction::{handle_add, handle_history, AddArgs, HistoryArgs};
