//! Status bar view
//!
//! Shows the visible invoice count, the latest message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};

/// Key hints for the current mode
fn hints(app: &App) -> &'static str {
    match (app.input_mode, &app.active_view) {
        (InputMode::Search, _) => " Enter/Esc:Done ",
        (InputMode::ColumnFilter(_), _) => " Tab:Next column  Enter/Esc:Done ",
        (InputMode::Normal, ActiveView::Details(_)) => " e:Edit  d:Delete  Esc:Back  ?:Help ",
        (InputMode::Normal, ActiveView::List) => " n:New  /:Search  s:Status  q:Quit  ?:Help ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} of {} invoices ", app.visible_invoices().len(), app.book.len()),
        Style::default().fg(Color::White),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = hints(app);

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
