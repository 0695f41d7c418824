//! Terminal User Interface module
//!
//! The dashboard: a sidebar menu with four pages (Add Transaction,
//! Transaction History, Financial Insights, Budget Goals), rendered with
//! ratatui over crossterm.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
