//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, InputMode};
use super::dialogs;
use super::event::Event;
use crate::services::FilterField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Key(_) => Ok(()),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search | InputMode::ColumnFilter(_) => handle_filter_key(app, key),
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Global keys (work in every view)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.open_dialog(ActiveDialog::AddInvoice);
            return;
        }
        KeyCode::Char('e') => {
            if let Some(id) = app.current_invoice().map(|inv| inv.id.clone()) {
                app.open_dialog(ActiveDialog::EditInvoice(id));
            }
            return;
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.current_invoice().map(|inv| inv.id.clone()) {
                app.open_dialog(ActiveDialog::ConfirmDelete(id));
            }
            return;
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::List => handle_list_key(app, key),
        ActiveView::Details(_) => handle_details_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),
        KeyCode::Enter => app.open_details(),

        KeyCode::Char('/') => app.input_mode = InputMode::Search,
        KeyCode::Char('c') => app.input_mode = InputMode::ColumnFilter(FilterField::InvoiceNumber),
        KeyCode::Char('s') => {
            app.cycle_status_filter();
            app.set_status(format!("Status filter: {}", app.status_filter));
        }
        KeyCode::Char('x') => {
            app.clear_filters();
            app.set_status("Filters cleared");
        }
        _ => {}
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('h') => {
            app.back_to_list()
        }
        _ => {}
    }
}

/// Handle keys while typing into the search box or a column filter
fn handle_filter_key(app: &mut App, key: KeyEvent) {
    let mode = app.input_mode;

    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if let InputMode::ColumnFilter(field) = mode {
                let forward = key.code == KeyCode::Tab && !key.modifiers.contains(KeyModifiers::SHIFT);
                app.input_mode = InputMode::ColumnFilter(step_column(field, forward));
            }
            return;
        }
        _ => {}
    }

    let input = match mode {
        InputMode::Search => Some(&mut app.search_input),
        InputMode::ColumnFilter(field) => app.column_input_mut(field),
        InputMode::Normal => None,
    };
    let Some(input) = input else {
        return;
    };

    match key.code {
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return,
    }

    app.clamp_selection();
}

fn step_column(field: FilterField, forward: bool) -> FilterField {
    let all = FilterField::ALL;
    let idx = all.iter().position(|f| *f == field).unwrap_or(0);
    if forward {
        all[(idx + 1) % all.len()]
    } else {
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmDelete(id) => dialogs::confirm::handle_key(app, id, key),
        ActiveDialog::AddInvoice | ActiveDialog::EditInvoice(_) => {
            dialogs::invoice_form::handle_key(app, key)
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NumberingPolicy, Settings};
    use crate::models::InvoiceId;
    use crate::services::InvoiceBook;
    use chrono::NaiveDate;

    fn app() -> App {
        App::new(
            InvoiceBook::with_sample_data(NumberingPolicy::default()),
            Settings::default(),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_search_mode_filters_as_you_type() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "acme");
        assert_eq!(app.visible_invoices().len(), 1);

        // Typing 'q' while searching must not quit
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Backspace);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.search_input.value(), "acme");
    }

    #[test]
    fn test_column_filter_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::ColumnFilter(FilterField::Amount));

        type_text(&mut app, "5");
        let numbers: Vec<String> = app
            .visible_invoices()
            .iter()
            .map(|i| i.invoice_number.to_string())
            .collect();
        assert_eq!(numbers, vec!["INV-001"]);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_status_cycle_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.visible_invoices()[0].customer, "Acme Corporation");
        assert_eq!(app.status_message.as_deref(), Some("Status filter: Paid"));
    }

    #[test]
    fn test_details_navigation_and_delete() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_view, ActiveView::Details(InvoiceId::from("2")));

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDelete(InvoiceId::from("2")));
        press(&mut app, KeyCode::Char('y'));

        assert_eq!(app.active_view, ActiveView::List);
        assert_eq!(app.book.len(), 2);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
