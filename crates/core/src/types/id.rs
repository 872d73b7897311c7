//! Newtype ID for type-safe catalog references.
//!
//! The Catalog Service issues ids; the UI never originates one. Ids are
//! opaque strings on the wire (the service exposes them as `_id`).

use serde::{Deserialize, Serialize};

/// Identifier of a catalog food item.
///
/// Wraps the opaque string id assigned by the Catalog Service. Two items are
/// the same item exactly when their `FoodId`s are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    /// Create an ID from a service-issued string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FoodId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for FoodId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<FoodId> for String {
    fn from(id: FoodId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_id_display_roundtrip() {
        let id = FoodId::new("64f1c0a2e4");
        assert_eq!(id.to_string(), "64f1c0a2e4");
        assert_eq!(id.as_str(), "64f1c0a2e4");
    }

    #[test]
    fn test_food_id_serde_transparent() {
        let id = FoodId::new("abc123");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"abc123\"");

        let back: FoodId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
