//! Transaction History page
//!
//! Category and date-range filters above a newest-first table.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::report::{format_date, truncate};
use crate::models::{Category, Transaction};
use crate::reports::{categories_present, date_bounds, HistoryFilter, HistoryView};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::TextInput;

/// Which filter control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryField {
    #[default]
    Category,
    From,
    To,
}

impl HistoryField {
    /// Get the next field
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::From,
            Self::From => Self::To,
            Self::To => Self::Category,
        }
    }

    /// Get the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::To,
            Self::From => Self::Category,
            Self::To => Self::From,
        }
    }
}

/// Filter controls for the history page
#[derive(Debug, Clone)]
pub struct HistoryFilterState {
    pub focused_field: HistoryField,
    /// `None` is "All"
    pub category: Option<Category>,
    pub from_input: TextInput,
    pub to_input: TextInput,
    /// First visible row of the table
    pub scroll: usize,
    /// Bounds last written by `sync_with`, to tell them from user edits
    synced_from: Option<String>,
    synced_to: Option<String>,
}

impl Default for HistoryFilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryFilterState {
    pub fn new() -> Self {
        Self {
            focused_field: HistoryField::Category,
            category: None,
            from_input: TextInput::new().label("From").placeholder("YYYY-MM-DD"),
            to_input: TextInput::new().label("To").placeholder("YYYY-MM-DD"),
            scroll: 0,
            synced_from: None,
            synced_to: None,
        }
    }

    /// Default the date inputs to the data's range and drop a category
    /// that no longer occurs
    ///
    /// A bound is refreshed when it is empty or still holds the value last
    /// filled in here; a bound the user typed is kept.
    pub fn sync_with(&mut self, transactions: &[Transaction]) {
        if let Some((min, max)) = date_bounds(transactions) {
            refresh_bound(&mut self.from_input, &mut self.synced_from, min);
            refresh_bound(&mut self.to_input, &mut self.synced_to, max);
        }
        if let Some(category) = self.category {
            if !categories_present(transactions).contains(&category) {
                self.category = None;
            }
        }
        self.scroll = 0;
    }

    /// Step the category filter through "All" and the present categories
    pub fn cycle_category(&mut self, transactions: &[Transaction], forward: bool) {
        let mut options: Vec<Option<Category>> = vec![None];
        options.extend(categories_present(transactions).into_iter().map(Some));

        let current = options
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.category = options[next];
        self.scroll = 0;
    }

    /// The text input behind the focused field, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            HistoryField::From => Some(&mut self.from_input),
            HistoryField::To => Some(&mut self.to_input),
            HistoryField::Category => None,
        }
    }

    /// Build the filter; an empty date input leaves that bound open
    pub fn to_filter(&self) -> Result<HistoryFilter, String> {
        let parse = |input: &TextInput| -> Result<Option<NaiveDate>, String> {
            let value = input.value().trim();
            if value.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| format!("Invalid {} date '{}'", input.label, value))
        };

        Ok(HistoryFilter {
            category: self.category,
            start_date: parse(&self.from_input)?,
            end_date: parse(&self.to_input)?,
        })
    }
}

/// Render the Transaction History page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let is_focused = app.focused_panel == FocusedPanel::Main;
    let transactions = app.transactions();

    render_filters(frame, app, is_focused, chunks[0]);

    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let filter = match app.history_filter.to_filter() {
        Ok(filter) => filter,
        Err(message) => {
            let text = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(Color::Red));
            frame.render_widget(text, chunks[1]);
            return;
        }
    };

    let rows = match HistoryView::generate(&transactions, &filter) {
        HistoryView::NoData => {
            let text = Paragraph::new("No transactions recorded yet.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(text, chunks[1]);
            return;
        }
        HistoryView::Transactions(rows) => rows,
    };

    if rows.is_empty() {
        let text = Paragraph::new("No transactions match the selected filters.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, chunks[1]);
        return;
    }

    let block = block.title(format!(" {} transaction(s) ", rows.len()));
    render_table(frame, app, &rows, block, chunks[1]);
}

fn render_filters(frame: &mut Frame, app: &App, is_focused: bool, area: Rect) {
    let block = Block::default()
        .title(" Transaction History ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let state = &app.history_filter;
    let focus = |field: HistoryField| is_focused && state.focused_field == field;

    let category_style = if focus(HistoryField::Category) {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let category_name = state.category.map_or("All", |c| c.name());
    let line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(category_name, category_style),
        Span::styled("   ↑/↓:Filter  ←/→:Change  PgUp/PgDn:Scroll", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), rows[0]);

    let mut from = state.from_input.clone();
    from.focused = focus(HistoryField::From);
    frame.render_widget(from, rows[1]);

    let mut to = state.to_input.clone();
    to.focused = focus(HistoryField::To);
    frame.render_widget(to, rows[2]);
}

fn refresh_bound(input: &mut TextInput, synced: &mut Option<String>, bound: NaiveDate) {
    let current = input.value();
    if current.is_empty() || synced.as_deref() == Some(current) {
        let value = bound.format("%Y-%m-%d").to_string();
        input.set_value(value.clone());
        *synced = Some(value);
    }
}

fn render_table(frame: &mut Frame, app: &App, rows: &[Transaction], block: Block, area: Rect) {
    let date_format = &app.settings.date_format;
    let symbol = &app.settings.currency_symbol;

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Category"),
        Cell::from("Description"),
        Cell::from("Amount"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let visible = area.height.saturating_sub(3) as usize;
    let scroll = app.history_filter.scroll.min(rows.len().saturating_sub(1));

    let body: Vec<Row> = rows
        .iter()
        .skip(scroll)
        .take(visible.max(1))
        .map(|txn| {
            let amount_color = if txn.is_income() { Color::Green } else { Color::White };
            Row::new(vec![
                Cell::from(format_date(txn.date, date_format)),
                Cell::from(txn.category.name()),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(txn.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Min(20),
        Constraint::Length(14),
    ];

    let table = Table::new(body, widths).header(header).block(block);
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(date(3, 1), Money::from_dollars(1000), Category::Income, "Salary"),
            Transaction::new(date(3, 5), Money::from_dollars(200), Category::Food, "Groceries"),
        ]
    }

    #[test]
    fn test_sync_fills_range_once() {
        let mut state = HistoryFilterState::new();
        state.sync_with(&sample());
        assert_eq!(state.from_input.value(), "2024-03-01");
        assert_eq!(state.to_input.value(), "2024-03-05");

        state.from_input.set_value("2024-03-02");
        state.sync_with(&sample());
        assert_eq!(state.from_input.value(), "2024-03-02");
    }

    #[test]
    fn test_sync_follows_new_data_until_edited() {
        let mut state = HistoryFilterState::new();
        state.sync_with(&sample());

        let mut txns = sample();
        txns.push(Transaction::new(date(4, 12), Money::from_dollars(30), Category::Food, "Lunch"));
        state.sync_with(&txns);
        assert_eq!(state.to_input.value(), "2024-04-12");
        assert_eq!(state.from_input.value(), "2024-03-01");

        state.to_input.set_value("2024-04-01");
        txns.push(Transaction::new(date(5, 2), Money::from_dollars(30), Category::Food, "Taxi"));
        state.sync_with(&txns);
        assert_eq!(state.to_input.value(), "2024-04-01");
    }

    #[test]
    fn test_cycle_category_options() {
        let txns = sample();
        let mut state = HistoryFilterState::new();

        state.cycle_category(&txns, true);
        assert_eq!(state.category, Some(Category::Income));
        state.cycle_category(&txns, true);
        assert_eq!(state.category, Some(Category::Food));
        state.cycle_category(&txns, true);
        assert_eq!(state.category, None);
        state.cycle_category(&txns, false);
        assert_eq!(state.category, Some(Category::Food));
    }

    #[test]
    fn test_to_filter() {
        let mut state = HistoryFilterState::new();
        assert_eq!(state.to_filter().unwrap(), HistoryFilter::new());

        state.category = Some(Category::Food);
        state.from_input.set_value("2024-03-01");
        state.to_input.set_value("2024-03-31");
        let filter = state.to_filter().unwrap();
        assert_eq!(
            filter,
            HistoryFilter::new()
                .category(Category::Food)
                .date_range(date(3, 1), date(3, 31))
        );

        state.to_input.set_value("soon");
        assert!(state.to_filter().is_err());
    }

    #[test]
    fn test_sync_drops_absent_category() {
        let mut state = HistoryFilterState::new();
        state.category = Some(Category::Healthcare);
        state.sync_with(&sample());
        assert_eq!(state.category, None);
    }
}
