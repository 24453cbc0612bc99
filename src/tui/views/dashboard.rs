//! Dashboard strip
//!
//! Four metric cards over the whole collection

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_total_revenue;
use crate::tui::app::App;
use crate::tui::layout::equal_columns;

/// Render the dashboard cards
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let metrics = app.metrics();
    let cards = [
        (
            "Total Revenue",
            format_total_revenue(metrics.total_amount),
            Color::White,
        ),
        (
            "Total Invoices",
            metrics.total_count.to_string(),
            Color::White,
        ),
        (
            "Paid Invoices",
            metrics.count_by_status.paid.to_string(),
            Color::Green,
        ),
        (
            "Overdue",
            metrics.count_by_status.overdue.to_string(),
            Color::Red,
        ),
    ];

    let columns = equal_columns(area, cards.len() as u16);
    for ((title, value, color), column) in cards.into_iter().zip(columns) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::Gray))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let figure = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(figure, column);
    }
}
