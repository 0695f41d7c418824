//! Finance Tracker - personal income and expense tracking
//!
//! This library provides the core of the `fintrack` application: a flat-file
//! transaction store and a set of insight reports computed fresh from it, with
//! a terminal dashboard and a command line on top.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, categories, money, months, budget goals
//! - `storage`: JSON file storage with atomic writes
//! - `reports`: History filtering, summary, breakdown, trend, budget vs. actual
//! - `services`: Input parsing and the per-run session
//! - `display`, `export`: Terminal tables and CSV output
//! - `cli`, `tui`: The two front ends
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use finance_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
