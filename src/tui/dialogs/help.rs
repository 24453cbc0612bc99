//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("n/a", "Create invoice"),
        Line::from(""),
    ];

    match app.active_view {
        ActiveView::List => {
            lines.push(heading("Invoice List"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("g/G", "Go to top/bottom"));
            lines.push(key_line("Enter", "View invoice details"));
            lines.push(key_line("e", "Edit invoice"));
            lines.push(key_line("d", "Delete invoice"));
            lines.push(Line::from(""));
            lines.push(heading("Filtering"));
            lines.push(Line::from(""));
            lines.push(key_line("/", "Search customer, project, number"));
            lines.push(key_line("s", "Cycle status filter"));
            lines.push(key_line("c", "Edit column filters"));
            lines.push(key_line("Tab", "Next column (while editing)"));
            lines.push(key_line("x", "Clear all filters"));
        }
        ActiveView::Details(_) => {
            lines.push(heading("Invoice Details"));
            lines.push(Line::from(""));
            lines.push(key_line("e", "Edit invoice"));
            lines.push(key_line("d", "Delete invoice"));
            lines.push(key_line("Esc/b", "Back to list"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
