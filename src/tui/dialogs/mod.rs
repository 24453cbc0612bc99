//! Dialog modules for the TUI
//!
//! Contains modal dialogs: the invoice form, delete confirmation, and help

pub mod confirm;
pub mod help;
pub mod invoice_form;
