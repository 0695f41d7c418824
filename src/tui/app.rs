//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use tracing::warn;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::{BudgetGoals, Transaction};
use crate::services::{CreateTransactionInput, Session, TransactionService};
use crate::storage::Storage;

use super::views::add_transaction::TransactionFormState;
use super::views::budget::BudgetFormState;
use super::views::history::HistoryFilterState;

/// Message shown after a transaction is saved
pub const ADD_SUCCESS_MESSAGE: &str = "Transaction added successfully!";
/// Message shown when the entry form is rejected
pub const ADD_FAILURE_MESSAGE: &str = "Please fill in all fields correctly.";

/// Which page is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    #[default]
    AddTransaction,
    History,
    Insights,
    BudgetGoals,
}

impl ActivePage {
    /// Pages in menu order
    pub const ALL: [ActivePage; 4] = [
        ActivePage::AddTransaction,
        ActivePage::History,
        ActivePage::Insights,
        ActivePage::BudgetGoals,
    ];

    /// Menu title
    pub fn title(self) -> &'static str {
        match self {
            Self::AddTransaction => "Add Transaction",
            Self::History => "Transaction History",
            Self::Insights => "Financial Insights",
            Self::BudgetGoals => "Budget Goals",
        }
    }

    /// Position in the menu
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Page for a `1`-`4` shortcut
    pub fn from_shortcut(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Session-scoped values such as budget goals
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active page
    pub active_page: ActivePage,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the status message reports a failure
    pub status_is_error: bool,

    /// Add Transaction form
    pub transaction_form: TransactionFormState,

    /// History filters
    pub history_filter: HistoryFilterState,

    /// Budget goal editor
    pub budget_form: BudgetFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        let mut session = Session::new();
        let budget_form = BudgetFormState::from_goals(session.budget_goals());

        Self {
            storage,
            settings,
            session,
            should_quit: false,
            active_page: ActivePage::default(),
            focused_panel: FocusedPanel::default(),
            status_message: None,
            status_is_error: false,
            transaction_form: TransactionFormState::new(),
            history_filter: HistoryFilterState::new(),
            budget_form,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    /// Set an error status message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different page
    pub fn switch_page(&mut self, page: ActivePage) {
        self.active_page = page;
        self.clear_status();

        match page {
            ActivePage::History => {
                let transactions = self.transactions();
                self.history_filter.sync_with(&transactions);
            }
            ActivePage::BudgetGoals => {
                self.budget_form = BudgetFormState::from_goals(self.session.budget_goals());
            }
            ActivePage::AddTransaction | ActivePage::Insights => {}
        }
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Snapshot of all transactions for rendering
    pub fn transactions(&self) -> Vec<Transaction> {
        match self.storage.transactions.all() {
            Ok(transactions) => transactions,
            Err(e) => {
                warn!(error = %e, "Failed to read transactions");
                Vec::new()
            }
        }
    }

    /// Submit the Add Transaction form
    ///
    /// On success the amount and description are cleared for the next
    /// entry. On failure nothing is saved and the form is left as typed.
    pub fn submit_transaction(&mut self) {
        match self.try_submit_transaction() {
            Ok(()) => {
                self.transaction_form.reset_after_submit();
                self.set_status(ADD_SUCCESS_MESSAGE);
            }
            Err(e) => {
                warn!(error = %e, "Transaction form rejected");
                self.set_error(ADD_FAILURE_MESSAGE);
            }
        }
    }

    fn try_submit_transaction(&self) -> TrackerResult<()> {
        let form = &self.transaction_form;
        let input = CreateTransactionInput::parse(
            form.date_input.value(),
            form.amount_input.value(),
            form.category.name(),
            form.description_input.value(),
        )?;
        TransactionService::new(self.storage).create(input)?;
        Ok(())
    }

    /// Apply the edited goals to the session, replacing the old ones
    pub fn update_budget_goals(&mut self) {
        match self.budget_form.to_goals() {
            Ok(goals) => {
                self.session.update_budget_goals(goals);
                self.set_status("Budget goals updated!");
            }
            Err(message) => {
                warn!(error = %message, "Budget goals rejected");
                self.set_error(message);
            }
        }
    }

    /// Current session budget goals
    pub fn budget_goals(&mut self) -> &BudgetGoals {
        self.session.budget_goals()
    }
}
