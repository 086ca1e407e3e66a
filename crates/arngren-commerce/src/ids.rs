//! Product identifiers.
//!
//! Product names are unique across the catalog, so the name doubles as the
//! identifier. The newtype keeps ids from being mixed up with display text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a product by its unique name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "Roboraptor".into();
        assert_eq!(id.as_str(), "Roboraptor");
        assert_eq!(id.to_string(), "Roboraptor");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("Roboraptor"), ProductId::from("Roboraptor".to_string()));
        assert_ne!(ProductId::new("Roboraptor"), ProductId::new("Robot Arm Kit"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("Roboraptor");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Roboraptor\"");
    }
}
