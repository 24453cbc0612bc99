//! Invoice display formatting
//!
//! Formats invoices and dashboard metrics for terminal output.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{
    due_phrase, format_currency, format_date_long, format_date_short, format_total_revenue,
    status_label,
};
use crate::models::Invoice;
use crate::services::InvoiceMetrics;

#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "Invoice #")]
    number: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            number: invoice.invoice_number.to_string(),
            customer: invoice.customer.clone(),
            project: invoice.project.clone(),
            amount: format_currency(invoice.amount, invoice.currency),
            date: format_date_short(invoice.date),
            status: status_label(invoice.status),
        }
    }
}

/// Message shown in place of an empty list
pub fn empty_list_hint(filtered: bool) -> &'static str {
    if filtered {
        "Try adjusting your search or filter criteria"
    } else {
        "Create your first invoice to get started"
    }
}

/// Format a list of invoices as a table
///
/// `filtered` selects the empty-state hint.
pub fn format_invoice_table(invoices: &[&Invoice], filtered: bool) -> String {
    if invoices.is_empty() {
        return format!("No invoices found.\n{}\n", empty_list_hint(filtered));
    }

    let rows: Vec<InvoiceRow> = invoices.iter().map(|inv| InvoiceRow::from(*inv)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!(
        "{} invoice{}\n",
        invoices.len(),
        if invoices.len() == 1 { "" } else { "s" }
    ));
    output
}

/// Format a single invoice's details
pub fn format_invoice_details(invoice: &Invoice, today: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(&format!("Invoice {}\n", invoice.invoice_number));
    output.push_str(&format!("  ID:          {}\n", invoice.id));
    output.push_str(&format!("  Status:      {}\n", status_label(invoice.status)));
    output.push('\n');
    output.push_str(&format!("  Customer:    {}\n", invoice.customer));
    output.push_str(&format!("  Project:     {}\n", invoice.project));
    output.push_str(&format!(
        "  Amount:      {}\n",
        format_currency(invoice.amount, invoice.currency)
    ));
    output.push_str(&format!("  Currency:    {}\n", invoice.currency));
    output.push('\n');
    output.push_str(&format!("  Issue Date:  {}\n", format_date_long(invoice.date)));
    output.push_str(&format!(
        "  Due Date:    {} ({})\n",
        format_date_long(invoice.due_date),
        due_phrase(invoice, today)
    ));

    if !invoice.description.is_empty() {
        output.push('\n');
        output.push_str("  Description:\n");
        for line in invoice.description.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }

    output
}

/// Format the dashboard figures
pub fn format_metrics_summary(metrics: &InvoiceMetrics) -> String {
    let counts = &metrics.count_by_status;
    let mut output = String::new();

    output.push_str(&format!(
        "Total Revenue:   {}\n",
        format_total_revenue(metrics.total_amount)
    ));
    output.push_str(&format!("Total Invoices:  {}\n", metrics.total_count));
    output.push_str(&format!("Paid Invoices:   {}\n", counts.paid));
    output.push_str(&format!("Pending:         {}\n", counts.pending));
    output.push_str(&format!("Overdue:         {}\n", counts.overdue));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumberingPolicy;
    use crate::services::{aggregate, InvoiceBook};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn test_table_contains_rows() {
        let book = InvoiceBook::with_sample_data(NumberingPolicy::default());
        let refs: Vec<&Invoice> = book.invoices().iter().collect();
        let table = format_invoice_table(&refs, false);

        assert!(table.contains("Invoice #"));
        assert!(table.contains("INV-001"));
        assert!(table.contains("$12,000.00"));
        assert!(table.contains("€2,800.00"));
        assert!(table.contains("Jun 5, 2024"));
        assert!(table.ends_with("3 invoices\n"));
    }

    #[test]
    fn test_empty_table_hint() {
        assert!(format_invoice_table(&[], true).contains("Try adjusting"));
        assert!(format_invoice_table(&[], false).contains("Create your first invoice"));
    }

    #[test]
    fn test_details() {
        let book = InvoiceBook::with_sample_data(NumberingPolicy::default());
        let invoice = book.find("INV-002").unwrap();
        let details = format_invoice_details(invoice, today());

        assert!(details.starts_with("Invoice INV-002\n"));
        assert!(details.contains("Tech Solutions Ltd"));
        assert!(details.contains("July 8, 2024 (Due in 7 days)"));
        assert!(details.contains("Native mobile app"));
    }

    #[test]
    fn test_metrics_summary() {
        let book = InvoiceBook::with_sample_data(NumberingPolicy::default());
        let summary = format_metrics_summary(&aggregate(book.invoices()));

        assert!(summary.contains("Total Revenue:   $20,300"));
        assert!(summary.contains("Total Invoices:  3"));
        assert!(summary.contains("Paid Invoices:   1"));
        assert!(summary.contains("Overdue:         1"));
    }
}
