//! Core data models for Invoice Desk
//!
//! This module contains the data structures of the invoicing domain:
//! invoices and their drafts, amounts, currencies, statuses, and the legacy
//! record shape accepted on import.

pub mod currency;
pub mod ids;
pub mod invoice;
pub mod legacy;
pub mod money;
pub mod number;
pub mod status;

pub use currency::Currency;
pub use ids::InvoiceId;
pub use invoice::{Invoice, InvoiceDraft};
pub use legacy::{InvoiceRecord, LegacyInvoice};
pub use money::Money;
pub use number::InvoiceNumber;
pub use status::InvoiceStatus;
