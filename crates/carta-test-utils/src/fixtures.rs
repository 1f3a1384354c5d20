//! Factory functions for catalog test data with sensible defaults.

use carta_client::{MenuResponse, RestaurantInfo};
use carta_model::{
    Category, CategoryId, Dish, DishId, RestaurantId, SearchHit, SubCategory, SubCategoryId,
};

/// Restaurant id used across scenario tests.
pub fn restaurant() -> RestaurantId {
    RestaurantId::new("rest-1")
}

/// A dish attached directly to `category`, no subcategory.
pub fn dish(id: &str, name: &str, category: &str) -> Dish {
    Dish {
        id: DishId::new(id),
        name: name.to_string(),
        category: CategoryId::new(category),
        subcategory: None,
        description: None,
        price: None,
    }
}

/// A dish nested under `subcategory` of `category`.
pub fn dish_in(id: &str, name: &str, category: &str, subcategory: &str) -> Dish {
    Dish {
        subcategory: Some(SubCategoryId::new(subcategory)),
        ..dish(id, name, category)
    }
}

/// A subcategory owned by `category`.
pub fn subcategory(id: &str, name: &str, category: &str) -> SubCategory {
    SubCategory {
        id: SubCategoryId::new(id),
        name: name.to_string(),
        category: CategoryId::new(category),
    }
}

/// A category with the given subcategories.
pub fn category(id: &str, name: &str, sub_categories: Vec<SubCategory>) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        sub_categories,
    }
}

/// A search hit wrapping `dish` with its resolved display names.
pub fn hit(dish: Dish, category_name: &str, sub_category_name: Option<&str>) -> SearchHit {
    SearchHit {
        dish,
        category_name: category_name.to_string(),
        sub_category_name: sub_category_name.map(str::to_string),
    }
}

/// A full menu payload.
pub fn menu(name: Option<&str>, dishes: Vec<Dish>, categories: Vec<Category>) -> MenuResponse {
    MenuResponse {
        restaurant: Some(RestaurantInfo {
            name: name.map(str::to_string),
        }),
        dishes,
        categories,
    }
}

/// The standing two-category menu used by most session tests: pizzas
/// (with a "classic" subcategory) and drinks.
pub fn sample_menu() -> MenuResponse {
    menu(
        Some("Trattoria Da Mario"),
        vec![
            dish("d1", "Bruschetta", "starters"),
            dish_in("d2", "Margherita", "pizza", "classic"),
            dish("d3", "Quattro Formaggi", "pizza"),
        ],
        vec![
            category("starters", "Starters", Vec::new()),
            category(
                "pizza",
                "Pizza",
                vec![subcategory("classic", "Classics", "pizza")],
            ),
        ],
    )
}
