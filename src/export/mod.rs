//! Export module
//!
//! CSV export of filtered transaction history.

pub mod csv;

pub use self::csv::{export_transactions_csv, CSV_HEADERS};
