//! The `CatalogApi` seam between session logic and transport.

use async_trait::async_trait;

use carta_model::{RestaurantId, SearchHit};

use crate::error::Result;
use crate::wire::MenuResponse;

/// Read-only catalog API consumed by sessions and the dashboard.
///
/// Implemented by [`crate::ApiClient`] over HTTP and by in-memory fakes
/// in tests. All methods map to a single GET; nothing here retries.
#[async_trait]
pub trait CatalogApi: Send + Sync + 'static {
    /// Total restaurant count across the catalog.
    async fn total_restaurants(&self) -> Result<u64>;

    /// Total dish count across the catalog.
    async fn total_dishes(&self) -> Result<u64>;

    /// Full menu payload for one restaurant: descriptor, flat dish
    /// collection, and categories with nested subcategories.
    async fn menu(&self, restaurant: &RestaurantId) -> Result<MenuResponse>;

    /// Dishes matching `query` within one restaurant.
    ///
    /// `query` must already be normalized (trimmed, lowercased); the
    /// overlay owns normalization so the transport never second-guesses
    /// it. Zero matches is `Ok(vec![])`, not an error.
    async fn search_dishes(&self, restaurant: &RestaurantId, query: &str)
        -> Result<Vec<SearchHit>>;
}
