//! JSON Export functionality
//!
//! Exports an invoice collection to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::error::{InvoiceError, InvoiceResult};
use crate::models::Invoice;
use crate::services::{aggregate, InvoiceMetrics};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Invoice collection export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Exported invoices, in collection order
    pub invoices: Vec<Invoice>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Dashboard figures over the exported invoices
    pub metrics: InvoiceMetrics,

    /// Earliest issue date
    pub earliest_invoice: Option<String>,

    /// Latest issue date
    pub latest_invoice: Option<String>,
}

impl InvoiceExport {
    /// Build an export of `invoices`
    pub fn from_invoices(invoices: &[&Invoice]) -> Self {
        let earliest_invoice = invoices.iter().map(|i| i.date).min().map(|d| d.to_string());
        let latest_invoice = invoices.iter().map(|i| i.date).max().map(|d| d.to_string());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            invoices: invoices.iter().map(|i| (*i).clone()).collect(),
            metadata: ExportMetadata {
                metrics: aggregate(invoices.iter().copied()),
                earliest_invoice,
                latest_invoice,
            },
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut ids = HashSet::new();
        for invoice in &self.invoices {
            if !ids.insert(invoice.id.as_str()) {
                return Err(format!("Duplicate invoice id {}", invoice.id));
            }
        }

        if self.metadata.metrics.total_count != self.invoices.len() {
            return Err(format!(
                "Metadata lists {} invoices but the export holds {}",
                self.metadata.metrics.total_count,
                self.invoices.len()
            ));
        }

        Ok(())
    }
}

/// Export invoices to JSON
pub fn export_invoices_json<W: Write>(
    invoices: &[&Invoice],
    writer: &mut W,
    pretty: bool,
) -> InvoiceResult<()> {
    let export = InvoiceExport::from_invoices(invoices);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| InvoiceError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> InvoiceResult<InvoiceExport> {
    let export: InvoiceExport =
        serde_json::from_str(json_str).map_err(|e| InvoiceError::Import(e.to_string()))?;

    export.validate().map_err(InvoiceError::Import)?;

    Ok(export)
}
