//! Aggregate totals for the counts dashboard.

use serde::Serialize;
use tracing::warn;

use carta_client::CatalogApi;

/// Counts shown on the dashboard, with an error slot for degraded
/// loads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DashboardTotals {
    /// Total restaurants in the catalog.
    pub total_restaurants: u64,
    /// Total dishes across all restaurants.
    pub total_dishes: u64,
    /// Set when either count fetch failed; both counts are zeroed then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Fetches both totals concurrently.
///
/// Both fetches must succeed for real numbers to be reported; either
/// one failing degrades to zero counts plus an error message. This
/// never fails outright and never retries.
pub async fn load_totals(api: &dyn CatalogApi) -> DashboardTotals {
    let (restaurants, dishes) = tokio::join!(api.total_restaurants(), api.total_dishes());

    match (restaurants, dishes) {
        (Ok(total_restaurants), Ok(total_dishes)) => DashboardTotals {
            total_restaurants,
            total_dishes,
            error: None,
        },
        (restaurants, dishes) => {
            let cause = restaurants.err().or_else(|| dishes.err());
            let message = cause.map_or_else(
                || "count fetch failed".to_string(),
                |err| err.to_string(),
            );
            warn!(error = %message, "dashboard count fetch degraded to zeros");
            DashboardTotals {
                total_restaurants: 0,
                total_dishes: 0,
                error: Some(message),
            }
        }
    }
}
