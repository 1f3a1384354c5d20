//! Search overlay: query normalization, the overlay state machine, and
//! last-request-wins sequencing for overlapping lookups.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

use carta_client::CatalogApi;
use carta_model::{RestaurantId, SearchHit};

/// Overlay state; whenever it is not [`SearchState::Inactive`] it
/// replaces the organized tree as the render source.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum SearchState {
    /// No active search; the catalog tree renders.
    #[default]
    Inactive,
    /// A lookup is in flight.
    Pending {
        /// Normalized query awaiting its result.
        query: String,
    },
    /// The lookup returned at least one hit.
    Results(Vec<SearchHit>),
    /// The lookup completed with zero hits.
    Empty {
        /// Normalized query that matched nothing.
        query: String,
    },
    /// The lookup itself failed (network or parse), as opposed to
    /// matching nothing.
    Failed {
        /// Normalized query whose lookup failed.
        query: String,
    },
}

impl SearchState {
    /// True when the overlay should replace the tree in the rendered
    /// view.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Normalizes raw query text into a lookup key: surrounding whitespace
/// trimmed, case folded to lowercase.
///
/// Returns `None` when nothing remains; callers treat that as "no
/// query" and never issue a remote call for it.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Manages dish-search requests for one restaurant view.
///
/// Invocations may overlap: a new keystroke can issue a search while a
/// prior one is still in flight. Each invocation takes a monotonically
/// increasing ticket, and a resolving request applies its outcome only
/// if its ticket is still the newest. A stale result that arrives after
/// a later query has been issued is discarded, never displayed.
pub struct SearchOverlay {
    api: Arc<dyn CatalogApi>,
    restaurant: RestaurantId,
    ticket: AtomicU64,
    state: Mutex<SearchState>,
}

impl SearchOverlay {
    /// Creates an inactive overlay scoped to `restaurant`.
    pub fn new(api: Arc<dyn CatalogApi>, restaurant: RestaurantId) -> Self {
        Self {
            api,
            restaurant,
            ticket: AtomicU64::new(0),
            state: Mutex::new(SearchState::Inactive),
        }
    }

    /// Snapshot of the current overlay state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.lock().clone()
    }

    /// Runs one search invocation and returns the overlay state as of
    /// its completion.
    ///
    /// A query that normalizes to empty resets the overlay to
    /// [`SearchState::Inactive`] synchronously, without a remote call;
    /// like [`SearchOverlay::clear`] it also invalidates any lookup
    /// still in flight. Otherwise one lookup scoped to this overlay's
    /// restaurant is issued; its outcome becomes
    /// [`SearchState::Results`], [`SearchState::Empty`], or
    /// [`SearchState::Failed`] — unless a newer invocation started
    /// meanwhile, in which case the outcome is dropped and the newer
    /// state stands.
    pub async fn search(&self, raw_query: &str) -> SearchState {
        let Some(query) = normalize_query(raw_query) else {
            self.clear();
            return SearchState::Inactive;
        };

        let ticket = self.ticket.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.lock();
            if ticket == self.ticket.load(Ordering::SeqCst) {
                *state = SearchState::Pending {
                    query: query.clone(),
                };
            }
        }

        let outcome = match self.api.search_dishes(&self.restaurant, &query).await {
            Ok(hits) if hits.is_empty() => SearchState::Empty { query },
            Ok(hits) => SearchState::Results(hits),
            Err(err) => {
                warn!(query = %query, error = %err, "dish search failed");
                SearchState::Failed { query }
            }
        };

        let mut state = self.lock();
        if ticket == self.ticket.load(Ordering::SeqCst) {
            *state = outcome;
        } else {
            debug!(ticket, "discarding stale search result");
        }
        state.clone()
    }

    /// Resets the overlay to inactive.
    ///
    /// Also advances the ticket so an in-flight lookup resolving later
    /// cannot resurrect a result over the cleared state. The owning
    /// session couples this with a full reload of the base collections.
    pub fn clear(&self) {
        self.ticket.fetch_add(1, Ordering::SeqCst);
        *self.lock() = SearchState::Inactive;
    }

    fn lock(&self) -> MutexGuard<'_, SearchState> {
        // State is only ever replaced wholesale, so a poisoned lock
        // still holds a coherent value.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_query("  Pizza  "), Some("pizza".to_string()));
        assert_eq!(normalize_query("pizza"), Some("pizza".to_string()));
    }

    #[test]
    fn test_normalize_rejects_whitespace_only() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
    }

    #[test]
    fn test_inactive_is_not_active() {
        assert!(!SearchState::Inactive.is_active());
        assert!(SearchState::Empty {
            query: "pizza".into()
        }
        .is_active());
        assert!(SearchState::Results(Vec::new()).is_active());
    }
}
