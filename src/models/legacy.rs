//! The older, status-less invoice schema
//!
//! Files written before invoice numbers and statuses existed carry records of
//! the shape `{id, customer, project, amount, currency, description, date,
//! dueDate}`. They are accepted as input and migrated on load; nothing ever
//! writes this shape back out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::ids::InvoiceId;
use super::invoice::Invoice;
use super::money::{self, Money};
use super::number::InvoiceNumber;

/// An invoice record in the legacy schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyInvoice {
    pub id: InvoiceId,
    pub customer: String,
    pub project: String,
    #[serde(with = "money::major_units")]
    pub amount: Money,
    pub currency: Currency,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
}

impl LegacyInvoice {
    /// Convert to the canonical schema; status stays absent
    pub fn into_invoice(self, invoice_number: InvoiceNumber) -> Invoice {
        Invoice {
            id: self.id,
            invoice_number,
            customer: self.customer,
            project: self.project,
            amount: self.amount,
            currency: self.currency,
            description: self.description,
            date: self.date,
            due_date: self.due_date,
            status: None,
        }
    }
}

/// One record of an input file, in either schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceRecord {
    Canonical(Invoice),
    Legacy(LegacyInvoice),
}

impl InvoiceRecord {
    pub fn id(&self) -> &InvoiceId {
        match self {
            Self::Canonical(invoice) => &invoice.id,
            Self::Legacy(legacy) => &legacy.id,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }
}
