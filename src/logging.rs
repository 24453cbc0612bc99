//! Tracing/logging initialization.
//!
//! The filter comes from `INVOICE_DESK_LOG`, then `RUST_LOG`, then the
//! `log_level` setting. CLI commands log to stderr; the TUI owns the
//! terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{InvoiceError, InvoiceResult};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "INVOICE_DESK_LOG";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Pick the filter directive from the environment overrides or the default
fn filter_directive(own: Option<String>, rust_log: Option<String>, default_level: &str) -> String {
    own.or(rust_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| default_level.to_string())
}

fn build_filter(default_level: &str) -> EnvFilter {
    let directive = filter_directive(
        std::env::var(LOG_ENV_VAR).ok(),
        std::env::var("RUST_LOG").ok(),
        default_level,
    );
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(target: &LogTarget, default_level: &str) -> InvoiceResult<()> {
    let filter = build_filter(default_level);

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    InvoiceError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(
            filter_directive(Some("debug".into()), Some("trace".into()), "warn"),
            "debug"
        );
        assert_eq!(filter_directive(None, Some("trace".into()), "warn"), "trace");
        assert_eq!(filter_directive(None, None, "warn"), "warn");
        assert_eq!(filter_directive(Some("  ".into()), None, "info"), "info");
    }

    #[test]
    fn test_file_target_creates_log() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("invoice-desk.log");

        init(&LogTarget::File(path.clone()), "warn").unwrap();
        assert!(path.exists());
    }
}
