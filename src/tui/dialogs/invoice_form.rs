//! Invoice create/edit dialog
//!
//! Modal form with tab navigation, currency and status pickers, and inline
//! per-field validation errors.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Currency, Invoice, InvoiceStatus};
use crate::services::{FormErrors, FormField, InvoiceForm};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Text fields of the form, in the order their inputs are stored
const TEXT_FIELDS: [FormField; 6] = [
    FormField::Customer,
    FormField::Project,
    FormField::Amount,
    FormField::Description,
    FormField::Date,
    FormField::DueDate,
];

/// State for the invoice form dialog
#[derive(Debug, Clone)]
pub struct InvoiceFormState {
    /// Currently focused field
    pub focused_field: FormField,

    /// Inputs for the text fields, in [`TEXT_FIELDS`] order
    inputs: Vec<TextInput>,

    pub currency: Currency,

    pub status: InvoiceStatus,

    /// Errors from the last rejected submit
    pub errors: FormErrors,
}

impl InvoiceFormState {
    /// An empty form for a new invoice
    pub fn new(today: NaiveDate, currency: Currency) -> Self {
        Self::from_form(InvoiceForm::new(today, currency))
    }

    /// A form pre-populated from an existing invoice
    pub fn from_invoice(invoice: &Invoice) -> Self {
        Self::from_form(InvoiceForm::from_invoice(invoice))
    }

    fn from_form(form: InvoiceForm) -> Self {
        let inputs = TEXT_FIELDS
            .iter()
            .map(|field| {
                TextInput::new()
                    .placeholder(placeholder(*field))
                    .content(form.value(*field))
            })
            .collect();
        Self {
            focused_field: FormField::default(),
            inputs,
            currency: form.currency,
            status: form.status,
            errors: FormErrors::default(),
        }
    }

    /// Snapshot of the raw form values
    pub fn to_form(&self) -> InvoiceForm {
        let text = |field| {
            self.input(field)
                .map(|input| input.value().to_string())
                .unwrap_or_default()
        };
        InvoiceForm {
            customer: text(FormField::Customer),
            project: text(FormField::Project),
            amount: text(FormField::Amount),
            currency: self.currency,
            description: text(FormField::Description),
            date: text(FormField::Date),
            due_date: text(FormField::DueDate),
            status: self.status,
        }
    }

    fn input(&self, field: FormField) -> Option<&TextInput> {
        let idx = TEXT_FIELDS.iter().position(|f| *f == field)?;
        self.inputs.get(idx)
    }

    fn input_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        let idx = TEXT_FIELDS.iter().position(|f| *f == field)?;
        self.inputs.get_mut(idx)
    }

    /// Get the currently focused input, if the focused field is text
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        self.input_mut(self.focused_field)
    }

    /// Replace a text field's content
    pub fn set_value(&mut self, field: FormField, value: &str) {
        if let Some(input) = self.input_mut(field) {
            input.set_content(value);
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Step the focused picker forward or back
    fn cycle_picker(&mut self, forward: bool) {
        match self.focused_field {
            FormField::Currency => {
                self.currency = if forward {
                    self.currency.next()
                } else {
                    self.currency.prev()
                };
            }
            FormField::Status => {
                self.status = if forward {
                    self.status.next()
                } else {
                    self.status.next().next()
                };
            }
            _ => {}
        }
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Customer => "Customer name",
        FormField::Project => "Project name",
        FormField::Amount => "0.00",
        FormField::Description => "What was delivered",
        FormField::Date | FormField::DueDate => "YYYY-MM-DD",
        FormField::Currency | FormField::Status => "",
    }
}

/// Handle key input for the form dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.invoice_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),

        KeyCode::Enter => {
            if let Err(errors) = app.submit_form() {
                let count = errors.iter().count();
                app.set_status(format!(
                    "{} field{} need attention",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
            }
        }

        KeyCode::Left if !form.focused_field.is_text() => form.cycle_picker(false),
        KeyCode::Right | KeyCode::Char(' ') if !form.focused_field.is_text() => {
            form.cycle_picker(true)
        }

        KeyCode::Backspace => {
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Render the form dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(72, 22, frame.area());
    frame.render_widget(Clear, area);

    let title = match &app.active_dialog {
        ActiveDialog::EditInvoice(_) => " Edit Invoice ",
        _ => " Create New Invoice ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    // Each field gets a value line and an error line
    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(1)); // Hints
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = &app.invoice_form;
    for (i, field) in FormField::ALL.iter().enumerate() {
        render_field(frame, chunks[i * 2], form, *field);
        if let Some(message) = form.errors.get(*field) {
            let error = Line::from(Span::styled(
                format!("{:>14}{}", "", message),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(Paragraph::new(error), chunks[i * 2 + 1]);
        }
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Next field  "),
        Span::styled("[←/→]", Style::default().fg(Color::Cyan)),
        Span::raw(" Change choice  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    let hints_idx = FormField::ALL.len() * 2 + 1;
    frame.render_widget(Paragraph::new(hints), chunks[hints_idx]);
}

fn render_field(frame: &mut Frame, area: Rect, form: &InvoiceFormState, field: FormField) {
    let focused = form.focused_field == field;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_style = if form.errors.get(field).is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![Span::styled(format!("{:>12}: ", field.label()), label_style)];

    match form.input(field) {
        Some(input) => spans.extend(input.spans(focused, value_style)),
        None => {
            let choice = match field {
                FormField::Currency => {
                    format!("{} ({})", form.currency.code(), form.currency.symbol())
                }
                _ => form.status.to_string(),
            };
            if focused {
                spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(choice, value_style));
                spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
            } else {
                spans.push(Span::styled(choice, value_style));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NumberingPolicy, Settings};
    use crate::services::InvoiceBook;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_form_round_trips() {
        let state = InvoiceFormState::new(today(), Currency::Eur);
        assert_eq!(state.to_form(), InvoiceForm::new(today(), Currency::Eur));
    }

    #[test]
    fn test_pickers_cycle() {
        let mut state = InvoiceFormState::new(today(), Currency::Usd);
        state.focused_field = FormField::Status;
        state.cycle_picker(true);
        assert_eq!(state.status, InvoiceStatus::Paid);
        state.cycle_picker(false);
        assert_eq!(state.status, InvoiceStatus::Pending);

        state.focused_field = FormField::Currency;
        state.cycle_picker(true);
        assert_eq!(state.currency, Currency::Usd.next());
    }

    #[test]
    fn test_typing_fills_a_valid_invoice() {
        let mut app = App::new(
            InvoiceBook::new(NumberingPolicy::Monotonic),
            Settings::default(),
            today(),
        );
        app.open_dialog(ActiveDialog::AddInvoice);

        for text in ["Initech", "TPS Reports", "1500", "", "Quarterly audit"] {
            for c in text.chars() {
                handle_key(&mut app, key(KeyCode::Char(c)));
            }
            handle_key(&mut app, key(KeyCode::Tab));
        }
        // Date is pre-filled; move on to the due date
        handle_key(&mut app, key(KeyCode::Tab));
        for c in "2024-07-31".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.has_dialog());
        let created = &app.book.invoices()[0];
        assert_eq!(created.customer, "Initech");
        assert_eq!(created.invoice_number.as_str(), "INV-001");
        assert_eq!(created.amount.cents(), 150_000);
    }

    #[test]
    fn test_enter_with_errors_reports_them() {
        let mut app = App::new(
            InvoiceBook::new(NumberingPolicy::Monotonic),
            Settings::default(),
            today(),
        );
        app.open_dialog(ActiveDialog::AddInvoice);
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.has_dialog());
        assert!(app.invoice_form.errors.customer.is_some());
        assert!(app.book.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("5 fields need attention"));
    }
}
