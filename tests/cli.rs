//! End-to-end tests for the `invoices` binary
//!
//! Every test runs with a temporary `INVOICE_DESK_DIR` so no user settings
//! leak in, and works on the built-in sample invoices unless a file is given.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn invoices(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("invoices").unwrap();
    cmd.env("INVOICE_DESK_DIR", home.path())
        .env_remove("INVOICE_DESK_FILE")
        .env_remove("INVOICE_DESK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_filters_by_status() {
    let home = TempDir::new().unwrap();
    invoices(&home)
        .args(["list", "--status", "paid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-001"))
        .stdout(predicate::str::contains("Acme Corporation"))
        .stdout(predicate::str::contains("INV-002").not());
}

#[test]
fn list_filters_by_amount_text() {
    let home = TempDir::new().unwrap();
    invoices(&home)
        .args(["list", "--amount", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-001"))
        .stdout(predicate::str::contains("INV-003").not());
}

#[test]
fn list_without_matches_suggests_adjusting_filters() {
    let home = TempDir::new().unwrap();
    invoices(&home)
        .args(["list", "--search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Try adjusting your search or filter criteria",
        ));
}

#[test]
fn summary_shows_dashboard_figures() {
    let home = TempDir::new().unwrap();
    invoices(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$20,300"))
        .stdout(predicate::str::contains("Total Invoices:  3"))
        .stdout(predicate::str::contains("Overdue:         1"));
}

#[test]
fn show_finds_invoice_by_number() {
    let home = TempDir::new().unwrap();
    invoices(&home)
        .args(["show", "inv-002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tech Solutions Ltd"))
        .stdout(predicate::str::contains("July 8, 2024"));
}

#[test]
fn show_unknown_invoice_fails() {
    let home = TempDir::new().unwrap();
    invoices(&home)
        .args(["show", "INV-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invoice not found: INV-999"));
}

#[test]
fn export_json_to_stdout() {
    let home = TempDir::new().unwrap();
    invoices(&home)
        .args(["export", "--format", "json", "--status", "overdue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("Digital Marketing Co"))
        .stdout(predicate::str::contains("Acme Corporation").not());
}

#[test]
fn migrate_numbers_legacy_records() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("legacy.json");
    std::fs::write(
        &input,
        r#"[
            {"id": "a1", "customer": "Old Client", "project": "Archive", "amount": 150,
             "currency": "GBP", "date": "2023-11-02", "dueDate": "2023-12-02"}
        ]"#,
    )
    .unwrap();

    invoices(&home)
        .arg("migrate")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"invoiceNumber\": \"INV-001\""))
        .stdout(predicate::str::contains("Old Client"));
}

#[test]
fn list_reads_invoice_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("invoices.json");
    std::fs::write(
        &input,
        r#"[
            {"id": "x", "invoiceNumber": "INV-042", "customer": "Northwind", "project": "Audit",
             "amount": 900, "currency": "USD", "date": "2024-03-01", "dueDate": "2024-03-31",
             "status": "pending", "description": "Quarterly audit"}
        ]"#,
    )
    .unwrap();

    invoices(&home)
        .arg("--file")
        .arg(&input)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-042"))
        .stdout(predicate::str::contains("Acme Corporation").not());
}

#[test]
fn missing_file_is_an_error() {
    let home = TempDir::new().unwrap();
    invoices(&home)
        .args(["--file", "does-not-exist.json", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
