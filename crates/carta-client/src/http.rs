//! Reqwest-backed implementation of [`CatalogApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use carta_model::{RestaurantId, SearchHit};

use crate::api::CatalogApi;
use crate::error::{ClientError, Result};
use crate::wire::{MenuResponse, SearchResponse, TotalDishesResponse, TotalRestaurantsResponse};

/// Bound on any single request, connection setup included. The server
/// contract has no timeout of its own; a hung fetch degrades to a
/// network failure instead of stalling the caller forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the catalog API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the API server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::network(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: Option<(&str, &str)>,
    ) -> Result<T> {
        let mut request = self.client.get(&url);
        if let Some((key, value)) = query {
            request = request.query(&[(key, value)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::network(format!("{url} answered {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::parse(format!("malformed response from {url}: {e}")))
    }
}

#[async_trait]
impl CatalogApi for ApiClient {
    async fn total_restaurants(&self) -> Result<u64> {
        let url = format!("{}/api/restaurants/totalRestaurants", self.base_url);
        let body: TotalRestaurantsResponse = self.get_json(url, None).await?;
        Ok(body.total_restaurants)
    }

    async fn total_dishes(&self) -> Result<u64> {
        let url = format!("{}/api/restaurants/totalDishes", self.base_url);
        let body: TotalDishesResponse = self.get_json(url, None).await?;
        Ok(body.total_dishes)
    }

    async fn menu(&self, restaurant: &RestaurantId) -> Result<MenuResponse> {
        let url = format!("{}/api/restaurants/allDishes/{restaurant}", self.base_url);
        self.get_json(url, None).await
    }

    async fn search_dishes(
        &self,
        restaurant: &RestaurantId,
        query: &str,
    ) -> Result<Vec<SearchHit>> {
        let url = format!("{}/api/restaurants/searchDish/{restaurant}", self.base_url);
        let body: SearchResponse = self.get_json(url, Some(("query", query))).await?;
        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let client = ApiClient::new("http://localhost:3001/").unwrap();
        assert_eq!(client.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_base_url_kept_verbatim_otherwise() {
        let client = ApiClient::new("https://menu.example.com").unwrap();
        assert_eq!(client.base_url, "https://menu.example.com");
    }
}
