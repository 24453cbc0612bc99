//! Loading invoice collections from JSON files
//!
//! An input file is either a bare array of invoice records or a JSON export
//! written by this application. Records may be in the canonical schema, the
//! legacy status-less schema, or a mixture of both.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::config::NumberingPolicy;
use crate::error::{InvoiceError, InvoiceResult};
use crate::models::InvoiceRecord;
use crate::services::InvoiceBook;

#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    Records(Vec<InvoiceRecord>),
    Export { invoices: Vec<InvoiceRecord> },
}

/// Counts from loading a file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub canonical: usize,
    pub legacy: usize,
}

impl LoadReport {
    fn of(records: &[InvoiceRecord]) -> Self {
        let legacy = records.iter().filter(|r| r.is_legacy()).count();
        Self {
            canonical: records.len() - legacy,
            legacy,
        }
    }

    pub fn total(&self) -> usize {
        self.canonical + self.legacy
    }
}

/// Parse invoice records from JSON text
pub fn parse_records(json: &str) -> InvoiceResult<Vec<InvoiceRecord>> {
    let input: InputFile = serde_json::from_str(json).map_err(|e| {
        InvoiceError::Import(format!("Not a valid invoice collection: {}", e))
    })?;

    let records = match input {
        InputFile::Records(records) => records,
        InputFile::Export { invoices } => invoices,
    };
    ensure_unique_ids(&records)?;
    Ok(records)
}

/// Reject a collection in which two records share an id
fn ensure_unique_ids(records: &[InvoiceRecord]) -> InvoiceResult<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(InvoiceError::Import(format!(
                "Duplicate invoice id: {}",
                record.id()
            )));
        }
    }
    Ok(())
}

/// Read invoice records from a JSON file
pub fn load_records(path: &Path) -> InvoiceResult<Vec<InvoiceRecord>> {
    if !path.exists() {
        return Err(InvoiceError::Import(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| InvoiceError::Import(format!("Failed to read file: {}", e)))?;

    let records = parse_records(&contents)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded invoice file");
    Ok(records)
}

/// Load a file straight into a book, migrating legacy records
pub fn load_book(path: &Path, numbering: NumberingPolicy) -> InvoiceResult<(InvoiceBook, LoadReport)> {
    let records = load_records(path)?;
    let report = LoadReport::of(&records);
    Ok((InvoiceBook::from_records(records, numbering), report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MIXED: &str = r#"[
        {
            "id": "1",
            "invoiceNumber": "INV-001",
            "customer": "Acme Corporation",
            "project": "Website Redesign",
            "amount": 5500,
            "currency": "USD",
            "description": "Redesign",
            "date": "2024-06-10",
            "dueDate": "2024-07-10",
            "status": "paid"
        },
        {
            "id": "1717000000000",
            "customer": "Old Client",
            "project": "Archive",
            "amount": 600.5,
            "currency": "GBP",
            "description": "",
            "date": "2024-05-01",
            "dueDate": "2024-05-31"
        }
    ]"#;

    #[test]
    fn test_parse_mixed_records() {
        let records = parse_records(MIXED).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            LoadReport::of(&records),
            LoadReport {
                canonical: 1,
                legacy: 1
            }
        );
    }

    #[test]
    fn test_parse_export_wrapper() {
        let json = format!(r#"{{"schema_version": "1.0.0", "invoices": {}}}"#, MIXED);
        assert_eq!(parse_records(&json).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_records(r#"{"invoices": 3}"#).unwrap_err();
        assert!(matches!(err, InvoiceError::Import(_)));
        assert!(parse_records(r#"[{"id": "1"}]"#).is_err());
    }

    #[test]
    fn test_load_book_migrates() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MIXED.as_bytes()).unwrap();

        let (book, report) = load_book(file.path(), NumberingPolicy::Monotonic).unwrap();
        assert_eq!(report.total(), 2);

        let migrated = book.find("1717000000000").unwrap();
        assert_eq!(migrated.invoice_number.as_str(), "INV-002");
        assert!(migrated.status.is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let legacy_clash = MIXED.replace("\"1717000000000\"", "\"1\"");
        let err = parse_records(&legacy_clash).unwrap_err();
        assert!(matches!(err, InvoiceError::Import(_)));
        assert!(err.to_string().contains("Duplicate invoice id: 1"));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            r#"[
                {"id": "1", "invoiceNumber": "INV-001", "customer": "A", "project": "P",
                 "amount": 10, "currency": "USD", "date": "2024-06-01",
                 "dueDate": "2024-07-01", "status": "paid"},
                {"id": "1", "invoiceNumber": "INV-002", "customer": "B", "project": "Q",
                 "amount": 20, "currency": "USD", "date": "2024-06-02",
                 "dueDate": "2024-07-02", "status": "pending"}
            ]"#
            .as_bytes(),
        )
        .unwrap();
        assert!(load_book(file.path(), NumberingPolicy::Monotonic).is_err());
    }

    #[test]
    fn test_out_of_range_amounts_are_rejected() {
        for amount in ["1e17", "-600.5"] {
            let json = MIXED.replace("600.5", amount);
            assert!(parse_records(&json).is_err(), "amount {} was accepted", amount);
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_records(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
