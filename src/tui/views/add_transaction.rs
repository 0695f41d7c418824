//! Add Transaction page
//!
//! Entry form with Date, Amount, Category and Description fields.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::MainPanelLayout;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Date,
    Amount,
    Category,
    Description,
}

impl TransactionField {
    /// Get the next field
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Date,
        }
    }

    /// Get the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Amount => Self::Date,
            Self::Category => Self::Amount,
            Self::Description => Self::Category,
        }
    }
}

/// State for the entry form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// Currently focused field
    pub focused_field: TransactionField,
    /// Date input, prefilled with today
    pub date_input: TextInput,
    /// Amount input
    pub amount_input: TextInput,
    /// Selected category, cycled with the arrow keys
    pub category: Category,
    /// Description input
    pub description_input: TextInput,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: TransactionField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category: Category::Income,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
        }
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move focus to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input behind the focused field, if it is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Description => Some(&mut self.description_input),
            TransactionField::Category => None,
        }
    }

    /// Clear the per-entry fields, keeping date and category
    pub fn reset_after_submit(&mut self) {
        self.amount_input.clear();
        self.description_input.clear();
        self.focused_field = TransactionField::Amount;
    }
}

/// Render the Add Transaction page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    let is_focused = app.focused_panel == FocusedPanel::Main;

    let header = Paragraph::new("↑/↓:Field  ←/→:Category  Enter:Add Transaction  Esc:Menu")
        .block(
            Block::default()
                .title(" Add New Transaction ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(header, layout.header);

    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(layout.content);
    frame.render_widget(block, layout.content);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;
    let focus = |field: TransactionField| is_focused && form.focused_field == field;

    let mut date = form.date_input.clone();
    date.focused = focus(TransactionField::Date);
    frame.render_widget(date, rows[0]);

    let mut amount = form.amount_input.clone();
    amount.focused = focus(TransactionField::Amount);
    frame.render_widget(amount, rows[1]);

    render_category_field(frame, form.category, focus(TransactionField::Category), rows[2]);

    let mut description = form.description_input.clone();
    description.focused = focus(TransactionField::Description);
    frame.render_widget(description, rows[3]);
}

fn render_category_field(frame: &mut Frame, category: Category, focused: bool, area: Rect) {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(category.name(), value_style),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
