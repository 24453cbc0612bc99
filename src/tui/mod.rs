//! Terminal User Interface module
//!
//! Interactive invoice manager built on ratatui: a dashboard of figures, a
//! filterable invoice list, a details view, and dialogs for data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
