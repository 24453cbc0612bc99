//! Service layer for Invoice Desk
//!
//! The service layer holds the invoicing logic: the owned invoice collection,
//! the list filter engine, dashboard metrics, and form validation.

pub mod book;
pub mod filter;
pub mod metrics;
pub mod validation;

pub use book::InvoiceBook;
pub use filter::{filter_invoices, FieldFilters, FilterCriteria, FilterField, StatusFilter};
pub use metrics::{aggregate, InvoiceMetrics, StatusCounts};
pub use validation::{FormErrors, FormField, FormRules, InvoiceForm, DESCRIPTION_PLACEHOLDER};
