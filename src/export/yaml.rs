//! YAML Export functionality
//!
//! Exports an invoice collection to YAML for human-readable archives.

use std::io::Write;

use crate::error::{InvoiceError, InvoiceResult};
use crate::export::json::InvoiceExport;
use crate::models::Invoice;

/// Export invoices to YAML
pub fn export_invoices_yaml<W: Write>(invoices: &[&Invoice], writer: &mut W) -> InvoiceResult<()> {
    let export = InvoiceExport::from_invoices(invoices);
    let header = |writer: &mut W, line: &str| {
        writeln!(writer, "{}", line).map_err(|e| InvoiceError::Export(e.to_string()))
    };

    header(writer, "# Invoice Desk Export")?;
    header(writer, &format!("# Generated: {}", export.exported_at))?;
    header(writer, &format!("# App Version: {}", export.app_version))?;
    header(writer, "")?;

    serde_yaml::to_writer(writer, &export).map_err(|e| InvoiceError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> InvoiceResult<InvoiceExport> {
    let export: InvoiceExport =
        serde_yaml::from_str(yaml_str).map_err(|e| InvoiceError::Import(e.to_string()))?;

    export.validate().map_err(InvoiceError::Import)?;

    Ok(export)
}
