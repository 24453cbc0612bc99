//! Invoice model
//!
//! An invoice is an immutable value record. Edits never mutate a record in
//! place: the collection swaps in a new record built from an
//! [`InvoiceDraft`] that keeps the original id and number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use super::ids::InvoiceId;
use super::money::{self, Money};
use super::number::InvoiceNumber;
use super::status::InvoiceStatus;

/// A billing record for a customer/project engagement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,

    pub invoice_number: InvoiceNumber,

    pub customer: String,

    pub project: String,

    #[serde(with = "money::major_units")]
    pub amount: Money,

    pub currency: Currency,

    #[serde(default)]
    pub description: String,

    /// Issue date
    pub date: NaiveDate,

    /// No ordering against `date` is enforced
    pub due_date: NaiveDate,

    /// `None` for records migrated from the status-less schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
}

/// The user-supplied part of an invoice, as accepted by form validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub customer: String,
    pub project: String,
    pub amount: Money,
    pub currency: Currency,
    pub description: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Assemble an invoice from its identity and a draft
    pub fn from_draft(id: InvoiceId, invoice_number: InvoiceNumber, draft: InvoiceDraft) -> Self {
        Self {
            id,
            invoice_number,
            customer: draft.customer,
            project: draft.project,
            amount: draft.amount,
            currency: draft.currency,
            description: draft.description,
            date: draft.date,
            due_date: draft.due_date,
            status: Some(draft.status),
        }
    }

    /// A full replacement of this record that keeps `id` and `invoice_number`
    pub fn replaced_with(&self, draft: InvoiceDraft) -> Self {
        Self::from_draft(self.id.clone(), self.invoice_number.clone(), draft)
    }

    pub fn is_paid(&self) -> bool {
        self.status == Some(InvoiceStatus::Paid)
    }

    /// Signed number of days from `today` until the due date (negative once past due)
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.invoice_number, self.customer, self.amount, self.currency
        )
    }
}
