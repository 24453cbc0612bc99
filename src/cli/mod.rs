//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod invoice;

use clap::Args;
use std::path::Path;

use crate::config::Settings;
use crate::error::InvoiceResult;
use crate::import::load_book;
use crate::services::{FilterCriteria, FilterField, InvoiceBook, StatusFilter};

pub use export::{handle_export_command, handle_migrate_command};
pub use invoice::{handle_list_command, handle_show_command, handle_summary_command};

/// Filter flags shared by `list` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search over customer, project and invoice number
    #[arg(short, long)]
    pub search: Option<String>,

    /// Status to show (all, pending, paid, overdue)
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Invoice number contains
    #[arg(long)]
    pub number: Option<String>,

    /// Customer contains
    #[arg(long)]
    pub customer: Option<String>,

    /// Project contains
    #[arg(long)]
    pub project: Option<String>,

    /// Amount text contains (e.g. "5" matches 5500 and 1500)
    #[arg(long)]
    pub amount: Option<String>,

    /// Issue date (YYYY-MM-DD) contains
    #[arg(long)]
    pub date: Option<String>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        criteria.status = self.status;
        if let Some(term) = &self.search {
            criteria = criteria.search(term.clone());
        }

        let columns = [
            (FilterField::InvoiceNumber, &self.number),
            (FilterField::Customer, &self.customer),
            (FilterField::Project, &self.project),
            (FilterField::Amount, &self.amount),
            (FilterField::Date, &self.date),
        ];
        for (field, pattern) in columns {
            if let Some(pattern) = pattern {
                criteria = criteria.field(field, pattern.clone());
            }
        }
        criteria
    }
}

/// Load the collection a command works on
///
/// With no file, the built-in sample invoices are used (or nothing, when
/// sample seeding is turned off).
pub fn open_book(file: Option<&Path>, settings: &Settings) -> InvoiceResult<InvoiceBook> {
    match file {
        Some(path) => {
            let (book, report) = load_book(path, settings.numbering)?;
            if report.legacy > 0 {
                tracing::info!(
                    legacy = report.legacy,
                    "file contains legacy records; run `invoices migrate` to convert it"
                );
            }
            Ok(book)
        }
        None if settings.seed_sample_data => Ok(InvoiceBook::with_sample_data(settings.numbering)),
        None => Ok(InvoiceBook::new(settings.numbering)),
    }
}
