//! Catalog session: owned fetched state for one restaurant view and
//! the render-source decision between tree and overlay.

use std::sync::Arc;

use tracing::{debug, warn};

use carta_client::CatalogApi;
use carta_model::{organize, CatalogTree, Category, Dish, RestaurantId};

use crate::search::{SearchOverlay, SearchState};

/// User-facing message recorded when the menu fetch fails. The cause is
/// logged; the banner stays stable for display.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load restaurant details. Please try again.";

/// Fetch lifecycle of a session. Every phase can re-enter
/// [`SessionPhase::Loading`]; there are no terminal phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// A menu fetch is in flight. Also the initial phase.
    Loading,
    /// The last fetch succeeded; the collections are current.
    Ready,
    /// The last fetch failed; the collections hold their last-known
    /// (possibly empty) values.
    Error(String),
}

/// What the view layer should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    /// The search overlay is active and replaces the tree.
    Search(SearchState),
    /// The organized catalog tree, rebuilt from the current
    /// collections.
    Tree(CatalogTree),
}

/// Owned state for one restaurant's catalog view.
///
/// Construct one per active view and drop it when the view goes away;
/// nothing here is global. The session is the only owner of the fetched
/// collections — the organizer and the overlay read inputs and return
/// derived values, they never mutate session state directly.
pub struct CatalogSession {
    api: Arc<dyn CatalogApi>,
    restaurant: RestaurantId,
    restaurant_name: Option<String>,
    dishes: Vec<Dish>,
    categories: Vec<Category>,
    phase: SessionPhase,
    overlay: SearchOverlay,
}

impl CatalogSession {
    /// Creates a session for `restaurant` in the initial
    /// [`SessionPhase::Loading`] phase with empty collections.
    pub fn new(api: Arc<dyn CatalogApi>, restaurant: RestaurantId) -> Self {
        let overlay = SearchOverlay::new(Arc::clone(&api), restaurant.clone());
        Self {
            api,
            restaurant,
            restaurant_name: None,
            dishes: Vec::new(),
            categories: Vec::new(),
            phase: SessionPhase::Loading,
            overlay,
        }
    }

    /// Fetches the menu payload and replaces both collections wholesale.
    ///
    /// On success the dish and category collections, along with the
    /// reported restaurant name, are replaced and the phase becomes
    /// [`SessionPhase::Ready`]. On failure the collections keep their
    /// last-known values and the phase records a stable error message.
    pub async fn load(&mut self) {
        self.phase = SessionPhase::Loading;
        match self.api.menu(&self.restaurant).await {
            Ok(menu) => {
                self.dishes = menu.dishes;
                self.categories = menu.categories;
                self.restaurant_name = menu.restaurant.and_then(|r| r.name);
                self.phase = SessionPhase::Ready;
            }
            Err(err) => {
                warn!(restaurant = %self.restaurant, error = %err, "menu fetch failed");
                self.phase = SessionPhase::Error(LOAD_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Re-runs [`CatalogSession::load`] after an external add, edit, or
    /// delete completes. Full replacement is the only supported
    /// resynchronization; there is no incremental merge.
    pub async fn refresh_after_mutation(&mut self) {
        debug!(restaurant = %self.restaurant, "refreshing catalog after mutation");
        self.load().await;
    }

    /// Reported restaurant name, or a placeholder derived from the id
    /// when the menu payload omitted one.
    #[must_use]
    pub fn restaurant_name(&self) -> String {
        self.restaurant_name
            .clone()
            .unwrap_or_else(|| format!("Restaurant {}", self.restaurant))
    }

    /// Decides the render source: an active overlay state wins over the
    /// tree.
    ///
    /// The tree is rebuilt from the current collections on every call,
    /// so it always reflects the latest fetch.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let state = self.overlay.state();
        if state.is_active() {
            SessionView::Search(state)
        } else {
            SessionView::Tree(organize(&self.dishes, &self.categories))
        }
    }

    /// Runs one search through the overlay.
    pub async fn search(&self, query: &str) -> SearchState {
        self.overlay.search(query).await
    }

    /// Clears the overlay and reloads the base collections.
    ///
    /// Clearing a search is defined to refresh the underlying catalog
    /// data, not merely to redisplay the existing tree — but as a state
    /// transition on this session, never a process-level reload.
    pub async fn clear_search(&mut self) {
        self.overlay.clear();
        self.load().await;
    }

    /// Current fetch phase.
    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// The restaurant this session is scoped to.
    #[must_use]
    pub fn restaurant(&self) -> &RestaurantId {
        &self.restaurant
    }

    /// Last-fetched dish collection, in server order.
    #[must_use]
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Last-fetched category collection, in server order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}
