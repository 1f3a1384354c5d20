//! Strongly-typed identifiers for catalog entities.
//!
//! All identifiers are assigned by the server and treated as opaque
//! strings on this side; the newtypes exist so that dish, category,
//! subcategory, and restaurant ids cannot be mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a restaurant. Taken from the current route/context and
/// used to scope every menu and search request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    /// Wraps a raw server-assigned identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a single dish within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(String);

impl DishId {
    /// Wraps a raw server-assigned identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a category in a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Wraps a raw server-assigned identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a subcategory nested under a category.
///
/// Subcategory ids are unique across the whole menu, not merely within
/// their owning category; the organizer relies on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubCategoryId(String);

impl SubCategoryId {
    /// Wraps a raw server-assigned identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubCategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_transparently() {
        let id = DishId::new("6643a1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6643a1\"");

        let back: DishId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display_matches_raw() {
        assert_eq!(RestaurantId::new("r-9").to_string(), "r-9");
        assert_eq!(CategoryId::new("starters").as_str(), "starters");
    }
}
