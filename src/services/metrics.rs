//! Dashboard metrics
//!
//! Summary figures over an invoice collection. Amounts in different
//! currencies are added as raw numbers; there is no conversion.

use serde::{Deserialize, Serialize};

use crate::models::{Invoice, InvoiceStatus, Money};

/// Invoice counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub paid: usize,
    pub overdue: usize,
}

impl StatusCounts {
    pub fn get(&self, status: InvoiceStatus) -> usize {
        match status {
            InvoiceStatus::Pending => self.pending,
            InvoiceStatus::Paid => self.paid,
            InvoiceStatus::Overdue => self.overdue,
        }
    }

    fn record(&mut self, status: InvoiceStatus) {
        match status {
            InvoiceStatus::Pending => self.pending += 1,
            InvoiceStatus::Paid => self.paid += 1,
            InvoiceStatus::Overdue => self.overdue += 1,
        }
    }

    /// Number of invoices that carry a status at all
    pub fn total(&self) -> usize {
        self.pending + self.paid + self.overdue
    }
}

/// Summary figures shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceMetrics {
    pub total_amount: Money,
    pub total_count: usize,
    /// Invoices without a status are in no bucket
    pub count_by_status: StatusCounts,
}

/// Compute the dashboard figures for `invoices`
pub fn aggregate<'a, I>(invoices: I) -> InvoiceMetrics
where
    I: IntoIterator<Item = &'a Invoice>,
{
    invoices
        .into_iter()
        .fold(InvoiceMetrics::default(), |mut metrics, invoice| {
            metrics.total_amount = metrics.total_amount.saturating_add(invoice.amount);
            metrics.total_count += 1;
            if let Some(status) = invoice.status {
                metrics.count_by_status.record(status);
            }
            metrics
        })
}
