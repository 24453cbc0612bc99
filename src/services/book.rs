//! The invoice collection
//!
//! `InvoiceBook` owns every invoice and is the only thing that mutates them.
//! Views borrow it read-only and hand back whole drafts.

use chrono::NaiveDate;

use crate::config::NumberingPolicy;
use crate::models::{
    Currency, Invoice, InvoiceDraft, InvoiceId, InvoiceNumber, InvoiceRecord, InvoiceStatus, Money,
};

/// Owned, ordered invoice collection
#[derive(Debug, Clone, Default)]
pub struct InvoiceBook {
    invoices: Vec<Invoice>,
    numbering: NumberingPolicy,
    /// Highest sequence ever issued or loaded
    last_sequence: u32,
}

impl InvoiceBook {
    /// Create an empty book
    pub fn new(numbering: NumberingPolicy) -> Self {
        Self {
            invoices: Vec::new(),
            numbering,
            last_sequence: 0,
        }
    }

    /// Build a book from loaded records, migrating legacy ones
    ///
    /// Legacy records are numbered after the canonical ones in file order and
    /// keep an absent status.
    pub fn from_records(records: Vec<InvoiceRecord>, numbering: NumberingPolicy) -> Self {
        let mut book = Self::new(numbering);
        book.last_sequence = records
            .iter()
            .filter_map(|r| match r {
                InvoiceRecord::Canonical(inv) => inv.invoice_number.sequence(),
                InvoiceRecord::Legacy(_) => None,
            })
            .max()
            .unwrap_or(0);

        let mut migrated = 0usize;
        for record in records {
            let invoice = match record {
                InvoiceRecord::Canonical(invoice) => invoice,
                InvoiceRecord::Legacy(legacy) => {
                    migrated += 1;
                    let number = book.next_number();
                    legacy.into_invoice(number)
                }
            };
            book.invoices.push(invoice);
        }

        if migrated > 0 {
            tracing::info!(migrated, total = book.invoices.len(), "migrated legacy invoices");
        }
        book
    }

    /// The three demonstration invoices
    pub fn with_sample_data(numbering: NumberingPolicy) -> Self {
        Self::from_records(
            sample_invoices().into_iter().map(InvoiceRecord::Canonical).collect(),
            numbering,
        )
    }

    pub fn numbering(&self) -> NumberingPolicy {
        self.numbering
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// All invoices in insertion order
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn get(&self, id: &InvoiceId) -> Option<&Invoice> {
        self.invoices.iter().find(|inv| &inv.id == id)
    }

    /// Look up by id, or by invoice number (case-insensitive)
    pub fn find(&self, key: &str) -> Option<&Invoice> {
        self.invoices
            .iter()
            .find(|inv| inv.id.as_str() == key)
            .or_else(|| {
                self.invoices
                    .iter()
                    .find(|inv| inv.invoice_number.as_str().eq_ignore_ascii_case(key))
            })
    }

    /// Append a new invoice with a fresh id and number
    pub fn create(&mut self, draft: InvoiceDraft) -> &Invoice {
        let number = self.next_number();
        let invoice = Invoice::from_draft(InvoiceId::new(), number, draft);
        tracing::info!(
            id = %invoice.id,
            number = %invoice.invoice_number,
            "created invoice"
        );
        let idx = self.invoices.len();
        self.invoices.push(invoice);
        &self.invoices[idx]
    }

    /// Replace the invoice with `id`, keeping its id and number
    ///
    /// Returns `None` and changes nothing when no invoice has that id.
    pub fn update(&mut self, id: &InvoiceId, draft: InvoiceDraft) -> Option<&Invoice> {
        let Some(idx) = self.position(id) else {
            tracing::debug!(id = %id, "update ignored, no such invoice");
            return None;
        };
        let replaced = self.invoices[idx].replaced_with(draft);
        tracing::info!(
            id = %replaced.id,
            number = %replaced.invoice_number,
            "updated invoice"
        );
        self.invoices[idx] = replaced;
        Some(&self.invoices[idx])
    }

    /// Remove the invoice with `id`; `None` when there is none
    pub fn delete(&mut self, id: &InvoiceId) -> Option<Invoice> {
        let Some(idx) = self.position(id) else {
            tracing::debug!(id = %id, "delete ignored, no such invoice");
            return None;
        };
        let removed = self.invoices.remove(idx);
        tracing::info!(
            id = %removed.id,
            number = %removed.invoice_number,
            "deleted invoice"
        );
        Some(removed)
    }

    fn position(&self, id: &InvoiceId) -> Option<usize> {
        self.invoices.iter().position(|inv| &inv.id == id)
    }

    fn next_number(&mut self) -> InvoiceNumber {
        match self.numbering {
            NumberingPolicy::Monotonic => {
                self.last_sequence = self.last_sequence.saturating_add(1);
                InvoiceNumber::from_sequence(self.last_sequence)
            }
            // Not collision-safe once anything has been deleted
            NumberingPolicy::CollectionSize => {
                let seq = u32::try_from(self.invoices.len() + 1).unwrap_or(u32::MAX);
                self.last_sequence = self.last_sequence.max(seq);
                InvoiceNumber::from_sequence(seq)
            }
        }
    }
}

fn sample_invoices() -> Vec<Invoice> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Invoice {
            id: InvoiceId::from("1"),
            invoice_number: InvoiceNumber::from_sequence(1),
            customer: "Acme Corporation".into(),
            project: "Website Redesign".into(),
            amount: Money::from_units_cents(5500, 0),
            currency: Currency::Usd,
            description: "Complete website redesign with modern UI/UX".into(),
            date: date(2024, 6, 10),
            due_date: date(2024, 7, 10),
            status: Some(InvoiceStatus::Paid),
        },
        Invoice {
            id: InvoiceId::from("2"),
            invoice_number: InvoiceNumber::from_sequence(2),
            customer: "Tech Solutions Ltd".into(),
            project: "Mobile App Development".into(),
            amount: Money::from_units_cents(12000, 0),
            currency: Currency::Usd,
            description: "Native mobile app for iOS and Android platforms".into(),
            date: date(2024, 6, 8),
            due_date: date(2024, 7, 8),
            status: Some(InvoiceStatus::Pending),
        },
        Invoice {
            id: InvoiceId::from("3"),
            invoice_number: InvoiceNumber::from_sequence(3),
            customer: "Digital Marketing Co".into(),
            project: "SEO Optimization".into(),
            amount: Money::from_units_cents(2800, 0),
            currency: Currency::Eur,
            description: "Complete SEO audit and optimization for 6 months".into(),
            date: date(2024, 6, 5),
            due_date: date(2024, 6, 20),
            status: Some(InvoiceStatus::Overdue),
        },
    ]
}
