//! TUI Views module
//!
//! One view per page, plus the sidebar and status bar.

pub mod add_transaction;
pub mod budget;
pub mod history;
pub mod insights;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActivePage, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_page {
        ActivePage::AddTransaction => add_transaction::render(frame, app, layout.main),
        ActivePage::History => history::render(frame, app, layout.main),
        ActivePage::Insights => insights::render(frame, app, layout.main),
        ActivePage::BudgetGoals => budget::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}
