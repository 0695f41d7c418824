//! Budget Goals page
//!
//! Editable monthly goal per expense category, followed by the current
//! month's budget vs. actual table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::report::format_percentage;
use crate::models::{BudgetGoals, Category, Money};
use crate::reports::BudgetComparison;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::BudgetLayout;
use crate::tui::widgets::input::TextInput;

/// Increment applied by `+` and `-`
pub const GOAL_STEP: Money = Money::from_dollars(50);

/// Editor state: one input per expense category
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    pub inputs: Vec<(Category, TextInput)>,
    pub selected: usize,
}

impl BudgetFormState {
    /// Prefill every expense category from `goals`; unbudgeted ones start at 0
    pub fn from_goals(goals: &BudgetGoals) -> Self {
        let inputs = Category::EXPENSES
            .iter()
            .map(|&category| {
                let amount = goals.get(category).unwrap_or_default();
                (
                    category,
                    TextInput::new()
                        .label(category.name())
                        .content(format_amount(amount)),
                )
            })
            .collect();

        Self {
            inputs,
            selected: 0,
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.inputs.len() {
            self.selected += 1;
        }
    }

    /// Select a category's row
    pub fn select(&mut self, category: Category) {
        if let Some(i) = self.inputs.iter().position(|(c, _)| *c == category) {
            self.selected = i;
        }
    }

    /// Input for the selected row
    pub fn selected_input(&mut self) -> Option<&mut TextInput> {
        self.inputs.get_mut(self.selected).map(|(_, input)| input)
    }

    /// Add or subtract one step, never going below zero
    ///
    /// Unparseable text is treated as zero.
    pub fn step_selected(&mut self, up: bool) {
        if let Some(input) = self.selected_input() {
            let current = Money::parse(input.value()).unwrap_or_default();
            let next = if up {
                current + GOAL_STEP
            } else {
                current - GOAL_STEP
            };
            let next = if next.is_negative() { Money::zero() } else { next };
            input.set_value(format_amount(next));
        }
    }

    /// Parse every input into a full set of goals
    pub fn to_goals(&self) -> Result<BudgetGoals, String> {
        let entries = self
            .inputs
            .iter()
            .map(|(category, input)| {
                Money::parse(input.value())
                    .map(|amount| (*category, amount))
                    .map_err(|_| format!("Invalid goal for {}: '{}'", category, input.value()))
            })
            .collect::<Result<Vec<_>, String>>()?;
        BudgetGoals::from_entries(entries).map_err(|e| e.to_string())
    }
}

fn format_amount(amount: Money) -> String {
    format!("{:.2}", amount.to_decimal())
}

/// Render the Budget Goals page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = BudgetLayout::new(area, app.budget_form.inputs.len() as u16);
    let is_focused = app.focused_panel == FocusedPanel::Main;

    render_goal_editor(frame, app, is_focused, layout.goals);

    let transactions = app.transactions();
    if transactions.is_empty() {
        return;
    }

    let symbol = app.settings.currency_symbol.clone();
    let comparison = BudgetComparison::for_current_month(&transactions, app.budget_goals());
    render_comparison(frame, &comparison, &symbol, layout.comparison);
}

fn render_goal_editor(frame: &mut Frame, app: &App, is_focused: bool, area: Rect) {
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" Set Monthly Budget Goals ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, (_, input)) in app.budget_form.inputs.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let mut input = input.clone();
        input.focused = is_focused && i == app.budget_form.selected;
        frame.render_widget(input, row);
    }

    let hint_y = inner.y + app.budget_form.inputs.len() as u16 + 1;
    if hint_y < inner.y + inner.height {
        let hint = Line::from(vec![
            Span::styled("[Enter] Update Budget Goals", Style::default().fg(Color::Yellow)),
            Span::styled("   +/-: ±50  ↑/↓: Category", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(
            Paragraph::new(hint),
            Rect::new(inner.x, hint_y, inner.width, 1),
        );
    }
}

fn render_comparison(frame: &mut Frame, comparison: &BudgetComparison, symbol: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" Budget vs. Actual Spending: {} ", comparison.month))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from("Budget"),
        Cell::from("Actual"),
        Cell::from("Remaining"),
        Cell::from("Used"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = comparison
        .rows
        .iter()
        .map(|row| {
            let remaining_color = if row.is_over_budget() {
                Color::Red
            } else {
                Color::Green
            };
            Row::new(vec![
                Cell::from(row.category.name()),
                Cell::from(row.budget.format_with_symbol(symbol)),
                Cell::from(row.actual.format_with_symbol(symbol)),
                Cell::from(row.remaining.format_with_symbol(symbol))
                    .style(Style::default().fg(remaining_color)),
                Cell::from(format_percentage(row.percent_used())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
