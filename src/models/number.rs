//! Human-readable invoice numbers (`INV-001`)

use serde::{Deserialize, Serialize};
use std::fmt;

const PREFIX: &str = "INV-";

/// Display identifier of an invoice
///
/// Stored as text so numbers from imported files survive verbatim even when
/// they do not follow the `INV-###` pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Build `INV-` followed by `seq` zero-padded to at least three digits
    pub fn from_sequence(seq: u32) -> Self {
        Self(format!("{}{:03}", PREFIX, seq))
    }

    pub fn from_string(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric part, when the number follows the `INV-###` pattern
    pub fn sequence(&self) -> Option<u32> {
        let digits = self.0.strip_prefix(PREFIX)?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding() {
        assert_eq!(InvoiceNumber::from_sequence(1).as_str(), "INV-001");
        assert_eq!(InvoiceNumber::from_sequence(42).as_str(), "INV-042");
        assert_eq!(InvoiceNumber::from_sequence(1234).as_str(), "INV-1234");
    }

    #[test]
    fn test_sequence() {
        assert_eq!(InvoiceNumber::from_sequence(7).sequence(), Some(7));
        assert_eq!(InvoiceNumber::from_string("INV-0100").sequence(), Some(100));
        assert_eq!(InvoiceNumber::from_string("2024/17").sequence(), None);
        assert_eq!(InvoiceNumber::from_string("INV-").sequence(), None);
    }
}
