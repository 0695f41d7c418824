//! Service layer
//!
//! Business logic on top of the storage layer: input parsing, validation
//! and the per-run session.

pub mod session;
pub mod transaction;

pub use session::Session;
pub use transaction::{CreateTransactionInput, TransactionService};
