//! Strongly-typed identifier wrappers
//!
//! Invoice ids are opaque strings: freshly created invoices get a random
//! UUID, while records loaded from older files keep whatever id they were
//! saved with (`"1"`, a millisecond timestamp, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of an invoice within a collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl InvoiceId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for narrow table columns
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InvoiceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = InvoiceId::new();
        let b = InvoiceId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_legacy_ids_are_kept_verbatim() {
        let id = InvoiceId::from_string("1718000000000");
        assert_eq!(id.as_str(), "1718000000000");
        assert_eq!(id.to_string(), "1718000000000");
    }

    #[test]
    fn test_short() {
        assert_eq!(InvoiceId::from("1").short(), "1");
        let id = InvoiceId::from("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "550e8400");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = InvoiceId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
        let back: InvoiceId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(back, id);
    }
}
