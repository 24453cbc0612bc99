//! CSV Export functionality
//!
//! Exports invoices to a spreadsheet-compatible CSV file, one row per invoice.

use serde::Serialize;
use std::io::Write;

use crate::error::InvoiceResult;
use crate::models::Invoice;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Invoice Number")]
    invoice_number: &'a str,
    #[serde(rename = "Customer")]
    customer: &'a str,
    #[serde(rename = "Project")]
    project: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Currency")]
    currency: &'static str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Due Date")]
    due_date: String,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Description")]
    description: &'a str,
}

impl<'a> From<&'a Invoice> for CsvRow<'a> {
    fn from(invoice: &'a Invoice) -> Self {
        Self {
            id: invoice.id.as_str(),
            invoice_number: invoice.invoice_number.as_str(),
            customer: &invoice.customer,
            project: &invoice.project,
            amount: invoice.amount.to_string(),
            currency: invoice.currency.code(),
            date: invoice.date.to_string(),
            due_date: invoice.due_date.to_string(),
            status: invoice.status.map(|s| s.as_str()).unwrap_or(""),
            description: &invoice.description,
        }
    }
}

/// Export invoices to CSV
pub fn export_invoices_csv<W: Write>(invoices: &[&Invoice], writer: W) -> InvoiceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for invoice in invoices {
        csv_writer.serialize(CsvRow::from(*invoice))?;
    }

    // The header is only emitted alongside the first record
    if invoices.is_empty() {
        csv_writer.write_record([
            "ID",
            "Invoice Number",
            "Customer",
            "Project",
            "Amount",
            "Currency",
            "Date",
            "Due Date",
            "Status",
            "Description",
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
