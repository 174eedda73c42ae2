//! Order status
//!
//! Only `new` is produced today. Any other value read from a request or the
//! store is kept verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub const NEW: &'static str = "new";

    pub fn new_order() -> Self {
        Self(Self::NEW.to_string())
    }

    /// Blank input means a new order
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Self::new_order()
        } else {
            Self(raw.to_string())
        }
    }

    pub fn is_new(&self) -> bool {
        self.0 == Self::NEW
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::new_order()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_status_is_new() {
        assert!(OrderStatus::parse("").is_new());
        assert!(OrderStatus::parse("  ").is_new());
        assert!(OrderStatus::default().is_new());
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = OrderStatus::parse("shipped");
        assert!(!status.is_new());
        assert_eq!(status.as_str(), "shipped");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"shipped\"");
    }
}
