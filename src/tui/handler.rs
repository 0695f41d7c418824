//! Event handler for the TUI
//!
//! Routes keyboard events to the sidebar or the active page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActivePage, App, FocusedPanel};
use super::event::Event;
use super::views::add_transaction::TransactionField;
use super::views::history::HistoryField;
use super::widgets::input::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Tab => app.toggle_panel_focus(),
        KeyCode::Esc => app.focused_panel = FocusedPanel::Sidebar,
        _ => match app.focused_panel {
            FocusedPanel::Sidebar => handle_sidebar_key(app, key),
            FocusedPanel::Main => handle_main_panel_key(app, key),
        },
    }
}

/// Handle keys when the sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(page) = ActivePage::from_shortcut(c) {
                app.switch_page(page);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let next = (app.active_page.index() + 1) % ActivePage::ALL.len();
            app.switch_page(ActivePage::ALL[next]);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let len = ActivePage::ALL.len();
            let prev = (app.active_page.index() + len - 1) % len;
            app.switch_page(ActivePage::ALL[prev]);
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }
}

/// Handle keys when the main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) {
    match app.active_page {
        ActivePage::AddTransaction => handle_add_transaction_key(app, key),
        ActivePage::History => handle_history_key(app, key),
        ActivePage::Insights => handle_insights_key(app, key),
        ActivePage::BudgetGoals => handle_budget_key(app, key),
    }
}

/// Apply an editing key to a text input; returns false if the key was not used
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

fn handle_add_transaction_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_transaction();
            return;
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.transaction_form.prev_field();
            return;
        }
        KeyCode::Down => {
            app.transaction_form.next_field();
            return;
        }
        _ => {}
    }

    if app.transaction_form.focused_field == TransactionField::Category {
        match key.code {
            KeyCode::Right | KeyCode::Char(' ') => {
                app.transaction_form.category = app.transaction_form.category.next();
            }
            KeyCode::Left => {
                app.transaction_form.category = app.transaction_form.category.prev();
            }
            _ => {}
        }
        return;
    }

    if let Some(input) = app.transaction_form.focused_input() {
        if edit_input(input, key) {
            app.clear_status();
        }
    }
}

fn handle_history_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::BackTab => {
            app.history_filter.focused_field = app.history_filter.focused_field.prev();
            return;
        }
        KeyCode::Down => {
            app.history_filter.focused_field = app.history_filter.focused_field.next();
            return;
        }
        KeyCode::PageDown => {
            app.history_filter.scroll = app.history_filter.scroll.saturating_add(10);
            return;
        }
        KeyCode::PageUp => {
            app.history_filter.scroll = app.history_filter.scroll.saturating_sub(10);
            return;
        }
        _ => {}
    }

    if app.history_filter.focused_field == HistoryField::Category {
        let forward = match key.code {
            KeyCode::Right | KeyCode::Char(' ') => true,
            KeyCode::Left => false,
            _ => return,
        };
        let transactions = app.transactions();
        app.history_filter.cycle_category(&transactions, forward);
        return;
    }

    if let Some(input) = app.history_filter.focused_input() {
        if edit_input(input, key) {
            app.history_filter.scroll = 0;
        }
    }
}

fn handle_insights_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(page) = ActivePage::from_shortcut(c) {
                app.switch_page(page);
            }
        }
        _ => {}
    }
}

fn handle_budget_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.update_budget_goals(),
        KeyCode::Up | KeyCode::BackTab => app.budget_form.move_up(),
        KeyCode::Down => app.budget_form.move_down(),
        KeyCode::Char('+') => app.budget_form.step_selected(true),
        KeyCode::Char('-') => app.budget_form.step_selected(false),
        _ => {
            if let Some(input) = app.budget_form.selected_input() {
                edit_input(input, key);
            }
        }
    }
}
