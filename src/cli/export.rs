//! CLI commands for data export
//!
//! `export` writes a filtered view of the collection; `migrate` rewrites a
//! whole input file in the canonical schema.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::FilterArgs;
use crate::config::NumberingPolicy;
use crate::error::{InvoiceError, InvoiceResult};
use crate::export::{export_invoices, ExportFormat};
use crate::import::load_book;
use crate::services::{filter_invoices, InvoiceBook};

/// Handle `export`
pub fn handle_export_command(
    book: &InvoiceBook,
    format: ExportFormat,
    output: Option<&Path>,
    filters: &FilterArgs,
) -> InvoiceResult<()> {
    let invoices = filter_invoices(book.invoices(), &filters.to_criteria());

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                InvoiceError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_invoices(&invoices, format, &mut writer)?;
            writer.flush()?;

            tracing::info!(
                count = invoices.len(),
                format = %format,
                path = %path.display(),
                "exported invoices"
            );
            eprintln!(
                "Exported {} invoice(s) to {}",
                invoices.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_invoices(&invoices, format, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// Handle `migrate`
pub fn handle_migrate_command(
    input: &Path,
    output: Option<&Path>,
    numbering: NumberingPolicy,
) -> InvoiceResult<()> {
    let (book, report) = load_book(input, numbering)?;
    let json = serde_json::to_string_pretty(book.invoices())?;

    tracing::info!(
        canonical = report.canonical,
        legacy = report.legacy,
        "migrated invoice file"
    );

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json)).map_err(|e| {
                InvoiceError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;
            eprintln!(
                "Migrated {} invoice(s) ({} legacy) to {}",
                report.total(),
                report.legacy,
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_records;
    use tempfile::TempDir;

    #[test]
    fn test_migrate_writes_canonical_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("old.json");
        let output = temp_dir.path().join("new.json");
        std::fs::write(
            &input,
            r#"[{"id": "a", "customer": "Old", "project": "P", "amount": 10,
                 "currency": "EUR", "date": "2024-01-01", "dueDate": "2024-02-01"}]"#,
        )
        .unwrap();

        handle_migrate_command(&input, Some(&output), NumberingPolicy::Monotonic).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("\"invoiceNumber\": \"INV-001\""));
        let records = parse_records(&text).unwrap();
        assert!(records.iter().all(|r| !r.is_legacy()));
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("paid.csv");
        let book = InvoiceBook::with_sample_data(NumberingPolicy::default());
        let filters = FilterArgs {
            status: "paid".parse().unwrap(),
            ..FilterArgs::default()
        };

        handle_export_command(&book, ExportFormat::Csv, Some(&output), &filters).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Acme Corporation"));
    }
}
