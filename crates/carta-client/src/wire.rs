//! Response envelopes for the catalog HTTP API.
//!
//! The server may omit any of the collection fields; absent arrays
//! decode as empty so a sparse payload never fails the parse.

use serde::Deserialize;

use carta_model::{Category, Dish, SearchHit};

/// Payload of `GET /api/restaurants/allDishes/{restaurantId}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuResponse {
    /// Restaurant descriptor; may be absent entirely.
    #[serde(default)]
    pub restaurant: Option<RestaurantInfo>,
    /// Flat dish collection, in server order.
    #[serde(default)]
    pub dishes: Vec<Dish>,
    /// Categories with nested subcategories, in display order.
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Restaurant descriptor nested in the menu payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantInfo {
    /// Display name; the session falls back to a placeholder when this
    /// is absent.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TotalRestaurantsResponse {
    #[serde(rename = "totalRestaurants")]
    pub total_restaurants: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TotalDishesResponse {
    #[serde(rename = "totalDishes")]
    pub total_dishes: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_response_decodes_full_payload() {
        let json = r#"{
            "restaurant": {"name": "Trattoria Da Mario"},
            "dishes": [
                {"_id": "d1", "name": "Bruschetta", "categoryId": "starters"}
            ],
            "categories": [
                {
                    "categoryId": "starters",
                    "categoryName": "Starters",
                    "subCategories": [
                        {
                            "subCategoryId": "cold",
                            "subCategoryName": "Cold",
                            "categoryId": "starters"
                        }
                    ]
                }
            ]
        }"#;

        let menu: MenuResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            menu.restaurant.and_then(|r| r.name).as_deref(),
            Some("Trattoria Da Mario")
        );
        assert_eq!(menu.dishes.len(), 1);
        assert_eq!(menu.categories[0].sub_categories.len(), 1);
    }

    #[test]
    fn test_menu_response_tolerates_sparse_payload() {
        let menu: MenuResponse = serde_json::from_str("{}").unwrap();
        assert!(menu.restaurant.is_none());
        assert!(menu.dishes.is_empty());
        assert!(menu.categories.is_empty());
    }

    #[test]
    fn test_totals_decode_camel_case() {
        let restaurants: TotalRestaurantsResponse =
            serde_json::from_str(r#"{"totalRestaurants": 12}"#).unwrap();
        assert_eq!(restaurants.total_restaurants, 12);

        let dishes: TotalDishesResponse =
            serde_json::from_str(r#"{"totalDishes": 240}"#).unwrap();
        assert_eq!(dishes.total_dishes, 240);
    }

    #[test]
    fn test_search_response_default_results() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
