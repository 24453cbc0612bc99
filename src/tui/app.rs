//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the invoice collection; views only read from it.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{Invoice, InvoiceId};
use crate::services::{
    aggregate, filter_invoices, FilterCriteria, FilterField, FormErrors, FormRules, InvoiceBook,
    InvoiceMetrics, StatusFilter,
};

use super::dialogs::invoice_form::InvoiceFormState;
use super::widgets::input::TextInput;

/// Ticks a status message stays visible (at the default 250ms tick rate)
const STATUS_TICKS: u8 = 16;

/// Which view is currently active
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    List,
    Details(InvoiceId),
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box
    Search,
    /// Typing into a column filter
    ColumnFilter(FilterField),
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddInvoice,
    EditInvoice(InvoiceId),
    ConfirmDelete(InvoiceId),
    Help,
}

/// Main application state
pub struct App {
    /// The invoice collection
    pub book: InvoiceBook,

    /// Application settings
    pub settings: Settings,

    /// Date used for due-date phrases
    pub today: NaiveDate,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the filtered list
    pub selected_index: usize,

    /// Search box
    pub search_input: TextInput,

    /// One input per filterable column, in [`FilterField::ALL`] order
    pub column_inputs: Vec<TextInput>,

    /// Status selector
    pub status_filter: StatusFilter,

    /// Create/edit form state
    pub invoice_form: InvoiceFormState,

    /// Status message to display
    pub status_message: Option<String>,

    status_ticks: u8,
}

impl App {
    /// Create a new App instance
    pub fn new(book: InvoiceBook, settings: Settings, today: NaiveDate) -> Self {
        let invoice_form = InvoiceFormState::new(today, settings.default_currency);
        Self {
            book,
            settings,
            today,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            search_input: TextInput::new().placeholder("Search invoices..."),
            column_inputs: FilterField::ALL
                .iter()
                .map(|_| TextInput::new().placeholder("Filter..."))
                .collect(),
            status_filter: StatusFilter::All,
            invoice_form,
            status_message: None,
            status_ticks: 0,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Age the status message; called on every tick
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    /// Form rules derived from settings
    pub fn form_rules(&self) -> FormRules {
        FormRules {
            require_description: self.settings.require_description,
        }
    }

    /// The criteria currently entered in the list view
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new().search(self.search_input.value());
        criteria.status = self.status_filter;
        for (field, input) in FilterField::ALL.iter().zip(&self.column_inputs) {
            criteria.fields.set(*field, input.value());
        }
        criteria
    }

    /// Invoices shown in the list, in collection order
    pub fn visible_invoices(&self) -> Vec<&Invoice> {
        filter_invoices(self.book.invoices(), &self.criteria())
    }

    /// Dashboard figures over the whole collection
    pub fn metrics(&self) -> InvoiceMetrics {
        aggregate(self.book.invoices())
    }

    /// The invoice under the list cursor
    pub fn selected_invoice(&self) -> Option<&Invoice> {
        self.visible_invoices().get(self.selected_index).copied()
    }

    /// The invoice shown in the details view
    pub fn detail_invoice(&self) -> Option<&Invoice> {
        match &self.active_view {
            ActiveView::Details(id) => self.book.get(id),
            ActiveView::List => None,
        }
    }

    /// The invoice an action applies to: the detail record, or the list selection
    pub fn current_invoice(&self) -> Option<&Invoice> {
        match &self.active_view {
            ActiveView::Details(_) => self.detail_invoice(),
            ActiveView::List => self.selected_invoice(),
        }
    }

    /// Input for a column filter
    pub fn column_input_mut(&mut self, field: FilterField) -> Option<&mut TextInput> {
        let idx = FilterField::ALL.iter().position(|f| *f == field)?;
        self.column_inputs.get_mut(idx)
    }

    pub fn column_input(&self, field: FilterField) -> Option<&TextInput> {
        let idx = FilterField::ALL.iter().position(|f| *f == field)?;
        self.column_inputs.get(idx)
    }

    /// Advance the status selector
    pub fn cycle_status_filter(&mut self) {
        self.status_filter = self.status_filter.next();
        self.clamp_selection();
    }

    /// Reset every list filter
    pub fn clear_filters(&mut self) {
        self.search_input.clear();
        for input in &mut self.column_inputs {
            input.clear();
        }
        self.status_filter = StatusFilter::All;
        self.clamp_selection();
    }

    /// Keep the cursor inside the filtered list
    pub fn clamp_selection(&mut self) {
        let len = self.visible_invoices().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Move selection up in the list
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down in the list
    pub fn move_down(&mut self) {
        let max = self.visible_invoices().len();
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.visible_invoices().len().saturating_sub(1);
    }

    /// Show the details of the selected invoice
    pub fn open_details(&mut self) {
        if let Some(id) = self.selected_invoice().map(|inv| inv.id.clone()) {
            self.active_view = ActiveView::Details(id);
        }
    }

    /// Return to the list view
    pub fn back_to_list(&mut self) {
        self.active_view = ActiveView::List;
        self.clamp_selection();
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddInvoice => {
                self.invoice_form =
                    InvoiceFormState::new(self.today, self.settings.default_currency);
            }
            ActiveDialog::EditInvoice(id) => match self.book.get(id) {
                Some(invoice) => self.invoice_form = InvoiceFormState::from_invoice(invoice),
                None => return,
            },
            _ => {}
        }
        self.input_mode = InputMode::Normal;
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Validate the form and create or update an invoice
    ///
    /// On failure the errors stay on the form and the collection is untouched.
    pub fn submit_form(&mut self) -> Result<(), FormErrors> {
        let form = self.invoice_form.to_form();
        let rules = self.form_rules();

        let result = match self.active_dialog.clone() {
            ActiveDialog::EditInvoice(id) => form.submit(rules, |draft| {
                if let Some(updated) = self.book.update(&id, draft) {
                    let number = updated.invoice_number.to_string();
                    self.set_status(format!("Invoice {} updated", number));
                }
            }),
            _ => form.submit(rules, |draft| {
                let created = self.book.create(draft);
                let (id, number) = (created.id.clone(), created.invoice_number.to_string());
                self.set_status(format!("Invoice {} created", number));

                // Land on the new row when the filters show it, else the last visible row
                let visible = self.visible_invoices();
                let index = visible
                    .iter()
                    .position(|inv| inv.id == id)
                    .unwrap_or_else(|| visible.len().saturating_sub(1));
                self.selected_index = index;
            }),
        };

        match result {
            Ok(()) => {
                self.invoice_form.errors = FormErrors::default();
                self.close_dialog();
                self.clamp_selection();
                Ok(())
            }
            Err(errors) => {
                self.invoice_form.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Delete an invoice, leaving the details view if it showed that invoice
    pub fn delete_invoice(&mut self, id: &InvoiceId) {
        if let Some(removed) = self.book.delete(id) {
            self.set_status(format!("Invoice {} deleted", removed.invoice_number));
        }
        if matches!(&self.active_view, ActiveView::Details(shown) if shown == id) {
            self.active_view = ActiveView::List;
        }
        self.clamp_selection();
    }
}
