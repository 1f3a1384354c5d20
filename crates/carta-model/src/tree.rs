//! Derived catalog tree: the nested category → subcategory → dish
//! structure rendered for a restaurant.
//!
//! The tree is rebuilt from scratch whenever the source collections
//! change. There is no incremental patching; [`organize`] is a pure
//! function over its inputs.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::{Category, Dish};
use crate::id::{CategoryId, SubCategoryId};

/// Dishes grouped under one subcategory, in fetch order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubCategorySection {
    /// Subcategory identifier.
    pub id: SubCategoryId,
    /// Subcategory display name.
    pub name: String,
    /// Dishes whose subcategory reference equals `id`.
    pub dishes: Vec<Dish>,
}

/// One category's slice of the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySection {
    /// Category identifier.
    pub id: CategoryId,
    /// Category display name.
    pub name: String,
    /// Dishes attached to the category with no subcategory.
    pub direct: Vec<Dish>,
    /// Subcategory groups in source order.
    pub groups: Vec<SubCategorySection>,
}

/// The fully organized catalog for one restaurant.
///
/// Every fetched dish appears exactly once: under its subcategory, as a
/// direct child of its category, or in [`CatalogTree::uncategorized`]
/// when its references resolve to nothing known.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CatalogTree {
    /// Category sections in source order.
    pub sections: Vec<CategorySection>,
    /// Dishes whose category/subcategory references did not resolve.
    ///
    /// Surfaced rather than dropped so that bad references are visible
    /// to the user and to tests.
    pub uncategorized: Vec<Dish>,
}

impl CatalogTree {
    /// True when the tree holds no dishes and no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.uncategorized.is_empty()
    }

    /// Total number of dishes placed anywhere in the tree.
    ///
    /// Always equals the length of the dish collection the tree was
    /// built from.
    #[must_use]
    pub fn dish_count(&self) -> usize {
        let placed: usize = self
            .sections
            .iter()
            .map(|section| {
                section.direct.len()
                    + section.groups.iter().map(|g| g.dishes.len()).sum::<usize>()
            })
            .sum();
        placed + self.uncategorized.len()
    }
}

/// Organizes a flat dish collection into the nested display tree.
///
/// Classification is exact: a dish with a subcategory reference goes
/// under that subcategory; a dish without one goes directly under its
/// category. Categories, subcategories, and dishes all keep the order
/// the server supplied. Dishes referencing an unknown category or
/// subcategory land in the uncategorized bucket, in fetch order.
///
/// Deterministic and total: empty inputs produce an empty tree, and
/// repeated calls with the same inputs yield structurally equal trees.
#[must_use]
pub fn organize(dishes: &[Dish], categories: &[Category]) -> CatalogTree {
    let known_categories: HashSet<&CategoryId> = categories.iter().map(|c| &c.id).collect();
    let known_subcategories: HashSet<&SubCategoryId> = categories
        .iter()
        .flat_map(|c| &c.sub_categories)
        .map(|s| &s.id)
        .collect();

    let sections = categories
        .iter()
        .map(|category| CategorySection {
            id: category.id.clone(),
            name: category.name.clone(),
            direct: dishes
                .iter()
                .filter(|d| d.category == category.id && d.subcategory.is_none())
                .cloned()
                .collect(),
            groups: category
                .sub_categories
                .iter()
                .map(|sub| SubCategorySection {
                    id: sub.id.clone(),
                    name: sub.name.clone(),
                    dishes: dishes
                        .iter()
                        .filter(|d| d.subcategory.as_ref() == Some(&sub.id))
                        .cloned()
                        .collect(),
                })
                .collect(),
        })
        .collect();

    let uncategorized = dishes
        .iter()
        .filter(|d| match &d.subcategory {
            Some(sub) => !known_subcategories.contains(sub),
            None => !known_categories.contains(&d.category),
        })
        .cloned()
        .collect();

    CatalogTree {
        sections,
        uncategorized,
    }
}
