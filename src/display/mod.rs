//! Display formatting for terminal output
//!
//! Provides utilities for formatting invoices for terminal display:
//! currency and date rendering, tables, and detail blocks.

pub mod format;
pub mod invoice;

pub use format::{
    due_phrase, format_currency, format_date_long, format_date_short, format_total_revenue,
    status_label,
};
pub use invoice::{
    empty_list_hint, format_invoice_details, format_invoice_table, format_metrics_summary,
};
