//! Invoice list view
//!
//! Search box, status filter, per-column filters, and the invoice table

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{empty_list_hint, format_currency, format_date_short, status_label};
use crate::models::{Invoice, InvoiceStatus};
use crate::services::FilterField;
use crate::tui::app::{App, InputMode};
use crate::tui::layout::ListLayout;

/// Column widths shared by the filter row and the table
const WIDTHS: [Constraint; 6] = [
    Constraint::Length(12), // Invoice #
    Constraint::Min(18),    // Customer
    Constraint::Min(18),    // Project
    Constraint::Length(16), // Amount
    Constraint::Length(14), // Date
    Constraint::Length(10), // Status
];

/// Render the list view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ListLayout::new(area);

    render_toolbar(frame, app, layout.toolbar);
    render_column_filters(frame, app, layout.column_filters);

    let invoices = app.visible_invoices();
    if invoices.is_empty() {
        render_empty(frame, app, layout.table);
    } else {
        render_table(frame, app, &invoices, layout.table);
    }
}

fn render_toolbar(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.input_mode == InputMode::Search;
    let border_color = if searching { Color::Cyan } else { Color::White };

    let block = Block::default()
        .title(" Invoices ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![Span::styled("Search: ", Style::default().fg(Color::Cyan))];
    spans.extend(
        app.search_input
            .spans(searching, Style::default().fg(Color::White)),
    );
    spans.push(Span::raw("   "));
    spans.push(Span::styled("Status: ", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(
        app.status_filter.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_column_filters(frame: &mut Frame, app: &App, area: Rect) {
    let cells: Vec<Cell> = FilterField::ALL
        .iter()
        .map(|field| {
            let focused = app.input_mode == InputMode::ColumnFilter(*field);
            let spans = app
                .column_input(*field)
                .map(|input| input.spans(focused, Style::default().fg(Color::White)))
                .unwrap_or_default();
            Cell::from(Line::from(spans))
        })
        .collect();

    // The status column is filtered by the toolbar selector
    let table = Table::new(vec![Row::new(cells)], WIDTHS).column_spacing(1);
    frame.render_widget(table, area);
}

fn status_style(status: Option<InvoiceStatus>) -> Style {
    match status {
        Some(InvoiceStatus::Paid) => Style::default().fg(Color::Green),
        Some(InvoiceStatus::Pending) => Style::default().fg(Color::Yellow),
        Some(InvoiceStatus::Overdue) => Style::default().fg(Color::Red),
        None => Style::default().fg(Color::DarkGray),
    }
}

fn render_table(frame: &mut Frame, app: &App, invoices: &[&Invoice], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Invoice #").style(bold),
        Cell::from("Customer").style(bold),
        Cell::from("Project").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Status").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = invoices
        .iter()
        .map(|invoice| {
            Row::new(vec![
                Cell::from(invoice.invoice_number.to_string()),
                Cell::from(invoice.customer.clone()),
                Cell::from(invoice.project.clone()),
                Cell::from(format_currency(invoice.amount, invoice.currency)),
                Cell::from(format_date_short(invoice.date)),
                Cell::from(status_label(invoice.status)).style(status_style(invoice.status)),
            ])
        })
        .collect();

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No invoices found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            empty_list_hint(app.criteria().is_active()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
