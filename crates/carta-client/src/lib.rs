//! # carta-client
//!
//! HTTP surface of the carta catalog API: the [`CatalogApi`] trait that
//! session logic programs against, the reqwest-backed [`ApiClient`]
//! implementation, the wire envelopes, and the error taxonomy.
//!
//! The API is consumed read-only here. Dish mutations happen through a
//! separate surface whose only contract toward this crate is that the
//! owning session refetches afterwards.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod error;
pub mod http;
pub mod wire;

pub use api::CatalogApi;
pub use error::{ClientError, Result};
pub use http::ApiClient;
pub use wire::{MenuResponse, RestaurantInfo};
