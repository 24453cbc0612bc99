//! Path management for Invoice Desk
//!
//! ## Path Resolution Order
//!
//! 1. `INVOICE_DESK_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/invoice-desk` on Linux, `~/Library/Application Support/invoice-desk`
//!    on macOS, `%APPDATA%\invoice-desk\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::InvoiceError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "INVOICE_DESK_DIR";

/// Manages all paths used by Invoice Desk
#[derive(Debug, Clone)]
pub struct InvoicePaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl InvoicePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, InvoiceError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create InvoicePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("invoice-desk.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), InvoiceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| InvoiceError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, InvoiceError> {
    ProjectDirs::from("", "", "invoice-desk")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| InvoiceError::Config("Could not determine a home directory".into()))
}
