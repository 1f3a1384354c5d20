//! # carta-model
//!
//! Domain types for the carta catalog client, plus the pure organizer
//! that turns a flat dish collection into the nested category →
//! subcategory → dish tree used for display.
//!
//! Everything here is an immutable snapshot of server data or a value
//! derived from one. No I/O, no async, no interior mutability.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod id;
pub mod tree;

pub use catalog::{Category, Dish, SearchHit, SubCategory};
pub use id::{CategoryId, DishId, RestaurantId, SubCategoryId};
pub use tree::{organize, CatalogTree, CategorySection, SubCategorySection};
