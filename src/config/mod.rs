//! Configuration module for Invoice Desk
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Form and numbering preferences

pub mod paths;
pub mod settings;

pub use paths::InvoicePaths;
pub use settings::{NumberingPolicy, Settings};
