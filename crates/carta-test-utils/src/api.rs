//! In-memory `CatalogApi` fake with operation recording.
//!
//! Responses are scripted up front; every call is recorded for later
//! assertions. Search responses can additionally be gated so tests
//! control which in-flight request resolves first.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use carta_client::{CatalogApi, ClientError, MenuResponse, Result};
use carta_model::{RestaurantId, SearchHit};

/// Record of one API call, for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOp {
    /// Total-restaurants count fetch.
    TotalRestaurants,
    /// Total-dishes count fetch.
    TotalDishes,
    /// Menu fetch for one restaurant.
    Menu {
        /// Restaurant the menu was fetched for.
        restaurant: String,
    },
    /// Dish search with an already-normalized query.
    Search {
        /// Restaurant the search was scoped to.
        restaurant: String,
        /// Normalized query string as received.
        query: String,
    },
}

struct Inner {
    ops: Vec<ApiOp>,
    total_restaurants: Result<u64>,
    total_dishes: Result<u64>,
    menu: Result<MenuResponse>,
    search: HashMap<String, Result<Vec<SearchHit>>>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            total_restaurants: Ok(0),
            total_dishes: Ok(0),
            menu: Ok(MenuResponse::default()),
            search: HashMap::new(),
        }
    }
}

/// Handle for releasing a gated search response.
pub struct SearchGate {
    notify: Arc<Notify>,
}

impl SearchGate {
    /// Lets the gated search call resolve. Safe to call before the
    /// search reaches the gate; the permit is stored.
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

/// Scripted in-memory `CatalogApi`.
#[derive(Default)]
pub struct ScriptedApi {
    inner: Mutex<Inner>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl ScriptedApi {
    /// Creates a fake that answers zero totals, an empty menu, and
    /// empty search results until scripted otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the two dashboard totals.
    pub fn with_totals(mut self, restaurants: u64, dishes: u64) -> Self {
        let inner = self.inner.get_mut().unwrap();
        inner.total_restaurants = Ok(restaurants);
        inner.total_dishes = Ok(dishes);
        self
    }

    /// Scripts both totals to fail with a network error.
    pub fn with_failing_totals(mut self) -> Self {
        let inner = self.inner.get_mut().unwrap();
        inner.total_restaurants = Err(ClientError::network("connection refused"));
        inner.total_dishes = Err(ClientError::network("connection refused"));
        self
    }

    /// Scripts the menu payload returned for every restaurant.
    pub fn with_menu(mut self, menu: MenuResponse) -> Self {
        self.inner.get_mut().unwrap().menu = Ok(menu);
        self
    }

    /// Scripts the hits returned for one normalized query.
    pub fn with_search_hits(mut self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.inner
            .get_mut()
            .unwrap()
            .search
            .insert(query.to_string(), Ok(hits));
        self
    }

    /// Scripts one normalized query to fail with a network error.
    pub fn with_failing_search(mut self, query: &str) -> Self {
        self.inner
            .get_mut()
            .unwrap()
            .search
            .insert(query.to_string(), Err(ClientError::network("search unreachable")));
        self
    }

    /// Replaces the scripted menu after construction, for tests that
    /// change the payload between loads.
    pub fn set_menu(&self, menu: MenuResponse) {
        self.inner.lock().unwrap().menu = Ok(menu);
    }

    /// Scripts subsequent menu fetches to fail, after construction.
    pub fn set_failing_menu(&self) {
        self.inner.lock().unwrap().menu = Err(ClientError::network("connection refused"));
    }

    /// Gates the search response for `query`; the call will not resolve
    /// until [`SearchGate::release`] runs.
    pub fn gate_search(&self, query: &str) -> SearchGate {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(query.to_string(), Arc::clone(&notify));
        SearchGate { notify }
    }

    /// All recorded operations, in call order.
    pub fn ops(&self) -> Vec<ApiOp> {
        self.inner.lock().unwrap().ops.clone()
    }

    /// Number of menu fetches recorded so far.
    pub fn menu_fetches(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, ApiOp::Menu { .. }))
            .count()
    }

    /// Number of search calls recorded so far.
    pub fn search_calls(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, ApiOp::Search { .. }))
            .count()
    }

    fn record(&self, op: ApiOp) {
        self.inner.lock().unwrap().ops.push(op);
    }
}

#[async_trait]
impl CatalogApi for ScriptedApi {
    async fn total_restaurants(&self) -> Result<u64> {
        self.record(ApiOp::TotalRestaurants);
        self.inner.lock().unwrap().total_restaurants.clone()
    }

    async fn total_dishes(&self) -> Result<u64> {
        self.record(ApiOp::TotalDishes);
        self.inner.lock().unwrap().total_dishes.clone()
    }

    async fn menu(&self, restaurant: &RestaurantId) -> Result<MenuResponse> {
        self.record(ApiOp::Menu {
            restaurant: restaurant.to_string(),
        });
        self.inner.lock().unwrap().menu.clone()
    }

    async fn search_dishes(
        &self,
        restaurant: &RestaurantId,
        query: &str,
    ) -> Result<Vec<SearchHit>> {
        self.record(ApiOp::Search {
            restaurant: restaurant.to_string(),
            query: query.to_string(),
        });

        let gate = self.gates.lock().unwrap().get(query).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.inner
            .lock()
            .unwrap()
            .search
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
