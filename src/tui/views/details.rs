//! Invoice details view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::{due_phrase, format_currency, format_date_long, status_label};
use crate::models::Invoice;
use crate::tui::app::App;

/// Render the details of the invoice shown by the app
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(invoice) = app.detail_invoice() else {
        let block = Block::default().title(" Invoice Details ").borders(Borders::ALL);
        frame.render_widget(
            Paragraph::new("This invoice no longer exists. Press Esc to go back.").block(block),
            area,
        );
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_information(frame, app, invoice, columns[0]);
    render_summary(frame, invoice, columns[1]);
}

fn label_value(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>14}: ", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn render_information(frame: &mut Frame, app: &App, invoice: &Invoice, area: Rect) {
    let block = Block::default()
        .title(format!(" Invoice {} ", invoice.invoice_number))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(""),
        label_value("Customer", invoice.customer.clone()),
        label_value("Project", invoice.project.clone()),
        label_value("Amount", format_currency(invoice.amount, invoice.currency)),
        label_value("Status", status_label(invoice.status)),
        Line::from(""),
        label_value("Issue Date", format_date_long(invoice.date)),
        label_value("Due Date", format_date_long(invoice.due_date)),
        Line::from(vec![
            Span::raw(format!("{:>16}", "")),
            Span::styled(
                due_phrase(invoice, app.today),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    if !invoice.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Description",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            invoice
                .description
                .lines()
                .map(|line| Line::from(line.to_string())),
        );
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_summary(frame: &mut Frame, invoice: &Invoice, area: Rect) {
    let block = Block::default()
        .title(" Invoice Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), Style::default().fg(Color::Gray)),
            Span::raw(value),
        ])
    };

    let lines = vec![
        row("Invoice Number:", invoice.invoice_number.to_string()),
        row("Issue Date:", format_date_long(invoice.date)),
        row("Due Date:", format_date_long(invoice.due_date)),
        row("Currency:", invoice.currency.to_string()),
        Line::from("─".repeat(area.width.saturating_sub(2) as usize)),
        Line::from(vec![
            Span::styled(
                format!("{:<16}", "Total Amount:"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_currency(invoice.amount, invoice.currency),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "e: Edit  d: Delete  Esc: Back",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
