//! Export module for Invoice Desk
//!
//! Writes an invoice collection (usually a filtered view of it) out in
//! several formats:
//! - CSV: one row per invoice, for spreadsheets
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with metadata

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::InvoiceResult;
use crate::models::Invoice;

pub use self::csv::export_invoices_csv;
pub use json::{export_invoices_json, import_from_json, InvoiceExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_invoices_yaml, import_from_yaml};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// One row per invoice
    #[default]
    Csv,
    /// Invoices plus metadata
    Json,
    /// Invoices plus metadata, human-readable
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

/// Write `invoices` to `writer` in `format`
pub fn export_invoices<W: Write>(
    invoices: &[&Invoice],
    format: ExportFormat,
    writer: &mut W,
) -> InvoiceResult<()> {
    match format {
        ExportFormat::Csv => export_invoices_csv(invoices, writer),
        ExportFormat::Json => {
            export_invoices_json(invoices, writer, true)?;
            writeln!(writer)?;
            Ok(())
        }
        ExportFormat::Yaml => export_invoices_yaml(invoices, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("yml".parse::<ExportFormat>(), Ok(ExportFormat::Yaml));
        assert!("xml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_dispatch_json() {
        let mut output = Vec::new();
        export_invoices(&[], ExportFormat::Json, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"schema_version\""));
        assert!(text.ends_with("}\n"));
    }
}
