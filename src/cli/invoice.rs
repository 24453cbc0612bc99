//! Invoice CLI commands
//!
//! Read-only views over a collection: the filtered list, the dashboard
//! summary, and a single invoice's details.

use chrono::Local;

use super::FilterArgs;
use crate::display::{format_invoice_details, format_invoice_table, format_metrics_summary};
use crate::error::{InvoiceError, InvoiceResult};
use crate::services::{aggregate, filter_invoices, InvoiceBook};

/// Handle `list`
pub fn handle_list_command(book: &InvoiceBook, filters: &FilterArgs) -> InvoiceResult<()> {
    let criteria = filters.to_criteria();
    let invoices = filter_invoices(book.invoices(), &criteria);

    print!("{}", format_invoice_table(&invoices, criteria.is_active()));
    Ok(())
}

/// Handle `summary`
pub fn handle_summary_command(book: &InvoiceBook) -> InvoiceResult<()> {
    let metrics = aggregate(book.invoices());

    println!("Invoice Summary");
    println!("{}", "=".repeat(30));
    print!("{}", format_metrics_summary(&metrics));
    Ok(())
}

/// Handle `show`
pub fn handle_show_command(book: &InvoiceBook, key: &str) -> InvoiceResult<()> {
    let invoice = book
        .find(key)
        .ok_or_else(|| InvoiceError::invoice_not_found(key))?;

    print!(
        "{}",
        format_invoice_details(invoice, Local::now().date_naive())
    );
    Ok(())
}
