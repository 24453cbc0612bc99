//! Invoice Desk - Terminal-based invoice management
//!
//! This library provides the core of the Invoice Desk application: an
//! invoice collection with filtering, dashboard metrics and form validation,
//! fronted by a command line and an interactive TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (invoices, money, currencies, statuses)
//! - `services`: Filtering, metrics, form validation and the invoice book
//! - `import`: Loading invoice files, including legacy records
//! - `export`: CSV, JSON and YAML export
//! - `display`: Formatting for terminal output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust
//! use invoice_desk::config::NumberingPolicy;
//! use invoice_desk::services::{aggregate, filter_invoices, FilterCriteria, InvoiceBook};
//!
//! let book = InvoiceBook::with_sample_data(NumberingPolicy::default());
//! let matches = filter_invoices(book.invoices(), &FilterCriteria::new().search("acme"));
//! assert_eq!(matches.len(), 1);
//!
//! let metrics = aggregate(book.invoices());
//! assert_eq!(metrics.total_count, 3);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::InvoiceError;
