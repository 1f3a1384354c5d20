//! Fetched catalog entities: dishes, categories, subcategories, and
//! enriched search hits.
//!
//! Field renames follow the wire format of the catalog API (camelCase,
//! Mongo-style `_id` on dishes). These structs are plain snapshots; the
//! client never mutates them after decoding.

use serde::{Deserialize, Serialize};

use crate::id::{CategoryId, DishId, SubCategoryId};

/// A dish as reported by the catalog API.
///
/// A dish carrying a subcategory reference belongs to that subcategory
/// only; it is not also listed directly under its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: DishId,
    /// Display name.
    pub name: String,
    /// Owning category.
    #[serde(rename = "categoryId")]
    pub category: CategoryId,
    /// Owning subcategory, when the dish is nested one level deeper.
    #[serde(rename = "subCategoryId", default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<SubCategoryId>,
    /// Free-text description shown on the dish card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Listed price, when the menu carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A menu category with its ordered subcategories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier.
    #[serde(rename = "categoryId")]
    pub id: CategoryId,
    /// Display name.
    #[serde(rename = "categoryName")]
    pub name: String,
    /// Subcategories in display order.
    #[serde(rename = "subCategories", default)]
    pub sub_categories: Vec<SubCategory>,
}

/// A subcategory nested under one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    /// Server-assigned identifier.
    #[serde(rename = "subCategoryId")]
    pub id: SubCategoryId,
    /// Display name.
    #[serde(rename = "subCategoryName")]
    pub name: String,
    /// Owning category.
    #[serde(rename = "categoryId")]
    pub category: CategoryId,
}

/// A dish returned by the search endpoint, enriched with the display
/// names of its category and (when present) subcategory so hits can be
/// rendered without consulting the organized tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matching dish.
    #[serde(flatten)]
    pub dish: Dish,
    /// Display name of the dish's category.
    #[serde(rename = "categoryName")]
    pub category_name: String,
    /// Display name of the dish's subcategory, when nested.
    #[serde(rename = "subCategoryName", default, skip_serializing_if = "Option::is_none")]
    pub sub_category_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_decodes_wire_names() {
        let json = r#"{
            "_id": "d1",
            "name": "Margherita",
            "categoryId": "pizza",
            "subCategoryId": "classic",
            "price": 8.5
        }"#;

        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.id, DishId::new("d1"));
        assert_eq!(dish.category, CategoryId::new("pizza"));
        assert_eq!(dish.subcategory, Some(SubCategoryId::new("classic")));
        assert_eq!(dish.price, Some(8.5));
        assert!(dish.description.is_none());
    }

    #[test]
    fn test_category_decodes_without_subcategories() {
        let json = r#"{"categoryId": "drinks", "categoryName": "Drinks"}"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Drinks");
        assert!(category.sub_categories.is_empty());
    }

    #[test]
    fn test_search_hit_flattens_dish_fields() {
        let json = r#"{
            "_id": "d2",
            "name": "Tiramisu",
            "categoryId": "desserts",
            "categoryName": "Desserts"
        }"#;

        let hit: SearchHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.dish.name, "Tiramisu");
        assert_eq!(hit.category_name, "Desserts");
        assert!(hit.sub_category_name.is_none());
    }
}
