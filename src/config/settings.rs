//! User settings for Invoice Desk
//!
//! Manages user preferences: default currency, invoice numbering policy,
//! form strictness, sample data seeding, and log verbosity.

use serde::{Deserialize, Serialize};

use super::paths::InvoicePaths;
use crate::error::InvoiceError;
use crate::models::Currency;

/// How new invoice numbers are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingPolicy {
    /// A counter that only moves forward; numbers are never reused
    #[default]
    Monotonic,
    /// `collection size + 1`; repeats numbers after deletions
    CollectionSize,
}

impl std::fmt::Display for NumberingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monotonic => write!(f, "monotonic"),
            Self::CollectionSize => write!(f, "collection-size"),
        }
    }
}

/// User settings for Invoice Desk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency preselected on new invoices
    #[serde(default)]
    pub default_currency: Currency,

    /// Invoice numbering policy
    #[serde(default)]
    pub numbering: NumberingPolicy,

    /// Whether the description is a required form field
    #[serde(default = "default_true")]
    pub require_description: bool,

    /// Whether to start with the sample invoices when no file is given
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    /// Default tracing filter when no environment override is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: Currency::default(),
            numbering: NumberingPolicy::default(),
            require_description: true,
            seed_sample_data: true,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &InvoicePaths) -> Result<Self, InvoiceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| InvoiceError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                InvoiceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InvoicePaths) -> Result<(), InvoiceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| InvoiceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| InvoiceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_currency, Currency::Usd);
        assert_eq!(settings.numbering, NumberingPolicy::Monotonic);
        assert!(settings.require_description);
        assert!(settings.seed_sample_data);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InvoicePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_currency: Currency::Eur,
            numbering: NumberingPolicy::CollectionSize,
            require_description: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_currency, Currency::Eur);
        assert_eq!(loaded.numbering, NumberingPolicy::CollectionSize);
        assert!(!loaded.require_description);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"numbering": "collection-size"}"#).unwrap();
        assert_eq!(loaded.numbering, NumberingPolicy::CollectionSize);
        assert_eq!(loaded.default_currency, Currency::Usd);
        assert!(loaded.seed_sample_data);
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InvoicePaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.schema_version, 1);
        assert!(!paths.is_initialized());
    }
}
