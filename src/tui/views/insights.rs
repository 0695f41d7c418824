//! Financial Insights page
//!
//! Headline metrics, expenses by category and the monthly trend.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::display::report::format_percentage;
use crate::models::Money;
use crate::reports::{CategoryBreakdown, MonthlyTrend, SummaryTotals};
use crate::tui::app::App;

/// Render the Financial Insights page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let transactions = app.transactions();
    let symbol = app.settings.currency_symbol.as_str();

    if transactions.is_empty() {
        let block = Block::default()
            .title(" Financial Insights ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let text = Paragraph::new("No transactions available for analysis.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Min(6),
        ])
        .split(area);

    render_metrics(frame, &SummaryTotals::generate(&transactions), symbol, chunks[0]);
    render_breakdown(frame, &CategoryBreakdown::generate(&transactions), symbol, chunks[1]);
    render_trend(frame, &MonthlyTrend::generate(&transactions), symbol, chunks[2]);
}

fn render_metrics(frame: &mut Frame, totals: &SummaryTotals, symbol: &str, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let net_color = if totals.net_savings.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let metrics = [
        ("Total Income", totals.total_income, Color::Green),
        ("Total Expenses", totals.total_expenses, Color::Yellow),
        ("Net Savings", totals.net_savings, net_color),
    ];

    for ((title, amount, color), column) in metrics.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let value = Paragraph::new(Line::from(Span::styled(
            amount.format_with_symbol(symbol),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(block);
        frame.render_widget(value, *column);
    }
}

fn render_breakdown(frame: &mut Frame, breakdown: &CategoryBreakdown, symbol: &str, area: Rect) {
    let block = Block::default()
        .title(" Expenses by Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if breakdown.is_empty() {
        let text = Paragraph::new("No expenses recorded.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let bars: Vec<Bar> = breakdown
        .slices
        .iter()
        .map(|slice| {
            Bar::default()
                .value(slice.total.cents().max(0) as u64)
                .label(Line::from(slice.category.name()))
                .text_value(format!(
                    "{} ({})",
                    slice.total.format_with_symbol(symbol),
                    format_percentage(slice.percentage)
                ))
                .style(Style::default().fg(Color::Cyan))
                .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_trend(frame: &mut Frame, trend: &MonthlyTrend, symbol: &str, area: Rect) {
    let block = Block::default()
        .title(" Monthly Spending Trend ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let points: Vec<(f64, f64)> = trend
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.total.to_decimal()))
        .collect();

    let max_total = trend.max_total();
    let y_max = max_total.to_decimal().max(1.0);
    let x_max = points.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Span> = match (trend.points.first(), trend.points.last()) {
        (Some(first), Some(last)) if first.month != last.month => vec![
            Span::raw(first.month.to_string()),
            Span::raw(last.month.to_string()),
        ],
        (Some(only), _) => vec![Span::raw(only.month.to_string())],
        _ => Vec::new(),
    };
    let y_labels = vec![
        Span::raw(Money::zero().format_with_symbol(symbol)),
        Span::raw(max_total.format_with_symbol(symbol)),
    ];

    let dataset = Dataset::default()
        .name("Total")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
