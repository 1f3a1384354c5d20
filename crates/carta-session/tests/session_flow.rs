//! Scenario tests for the catalog session: load lifecycle, render
//! source selection, clear-search behavior, and dashboard totals.

use std::sync::Arc;

use carta_session::{load_totals, CatalogSession, SearchState, SessionPhase, SessionView};
use carta_test_utils::{fixtures, ApiOp, ScriptedApi};

fn session_with(api: Arc<ScriptedApi>) -> CatalogSession {
    CatalogSession::new(api, fixtures::restaurant())
}

#[tokio::test]
async fn test_load_replaces_collections_and_enters_ready() {
    let api = Arc::new(ScriptedApi::new().with_menu(fixtures::sample_menu()));
    let mut session = session_with(api.clone());
    assert_eq!(*session.phase(), SessionPhase::Loading);

    session.load().await;

    assert_eq!(*session.phase(), SessionPhase::Ready);
    assert_eq!(session.dishes().len(), 3);
    assert_eq!(session.categories().len(), 2);
    assert_eq!(session.restaurant_name(), "Trattoria Da Mario");
    assert_eq!(
        api.ops(),
        vec![ApiOp::Menu {
            restaurant: "rest-1".to_string()
        }]
    );
}

#[tokio::test]
async fn test_load_failure_keeps_last_known_collections() {
    let api = Arc::new(ScriptedApi::new().with_menu(fixtures::sample_menu()));
    let mut session = session_with(api.clone());
    session.load().await;
    assert_eq!(session.dishes().len(), 3);

    api.set_failing_menu();
    session.load().await;

    match session.phase() {
        SessionPhase::Error(message) => {
            assert_eq!(message, carta_session::session::LOAD_FAILED_MESSAGE);
        }
        other => panic!("expected error phase, got {other:?}"),
    }
    // Collections stay at their last-known values.
    assert_eq!(session.dishes().len(), 3);
    assert_eq!(session.categories().len(), 2);
}

#[tokio::test]
async fn test_restaurant_name_falls_back_to_placeholder() {
    let api = Arc::new(
        ScriptedApi::new().with_menu(fixtures::menu(None, Vec::new(), Vec::new())),
    );
    let mut session = session_with(api);
    session.load().await;

    assert_eq!(session.restaurant_name(), "Restaurant rest-1");
}

#[tokio::test]
async fn test_view_renders_organized_tree_when_inactive() {
    let api = Arc::new(ScriptedApi::new().with_menu(fixtures::sample_menu()));
    let mut session = session_with(api);
    session.load().await;

    let SessionView::Tree(tree) = session.view() else {
        panic!("expected tree view");
    };
    assert_eq!(tree.dish_count(), 3);
    assert_eq!(tree.sections.len(), 2);
    // Margherita sits under the classics subcategory, not directly
    // under pizza.
    let pizza = &tree.sections[1];
    assert_eq!(pizza.direct.len(), 1);
    assert_eq!(pizza.groups[0].dishes.len(), 1);
    assert!(tree.uncategorized.is_empty());
}

#[tokio::test]
async fn test_empty_search_result_replaces_tree() {
    let api = Arc::new(ScriptedApi::new().with_menu(fixtures::sample_menu()));
    let mut session = session_with(api);
    session.load().await;

    let state = session.search("margherita").await;
    assert_eq!(
        state,
        SearchState::Empty {
            query: "margherita".to_string()
        }
    );

    // The overlay, not the tree, is the render source now.
    match session.view() {
        SessionView::Search(SearchState::Empty { query }) => assert_eq!(query, "margherita"),
        other => panic!("expected empty search view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_failure_is_distinct_from_empty() {
    let api = Arc::new(
        ScriptedApi::new()
            .with_menu(fixtures::sample_menu())
            .with_failing_search("margherita"),
    );
    let mut session = session_with(api);
    session.load().await;

    let state = session.search("margherita").await;
    assert_eq!(
        state,
        SearchState::Failed {
            query: "margherita".to_string()
        }
    );
}

#[tokio::test]
async fn test_clear_search_reloads_and_restores_tree() {
    let api = Arc::new(ScriptedApi::new().with_menu(fixtures::sample_menu()));
    let mut session = session_with(api.clone());
    session.load().await;
    session.search("margherita").await;
    assert!(matches!(session.view(), SessionView::Search(_)));
    assert_eq!(api.menu_fetches(), 1);

    session.clear_search().await;

    // Clearing resets the overlay and refetches the base collections.
    assert_eq!(api.menu_fetches(), 2);
    assert!(matches!(session.view(), SessionView::Tree(_)));
    assert_eq!(*session.phase(), SessionPhase::Ready);
}

#[tokio::test]
async fn test_refresh_after_mutation_replaces_wholesale() {
    let api = Arc::new(ScriptedApi::new().with_menu(fixtures::sample_menu()));
    let mut session = session_with(api.clone());
    session.load().await;
    assert_eq!(session.dishes().len(), 3);

    let mut updated = fixtures::sample_menu();
    updated
        .dishes
        .push(fixtures::dish("d4", "Limoncello", "drinks"));
    api.set_menu(updated);

    session.refresh_after_mutation().await;

    assert_eq!(session.dishes().len(), 4);
    assert_eq!(api.menu_fetches(), 2);
}

#[tokio::test]
async fn test_totals_load_concurrently() {
    let api = ScriptedApi::new().with_totals(7, 120);

    let totals = load_totals(&api).await;

    assert_eq!(totals.total_restaurants, 7);
    assert_eq!(totals.total_dishes, 120);
    assert!(totals.error.is_none());
    assert_eq!(api.ops(), vec![ApiOp::TotalRestaurants, ApiOp::TotalDishes]);
}

#[tokio::test]
async fn test_totals_degrade_to_zeros_on_failure() {
    let api = ScriptedApi::new().with_failing_totals();

    let totals = load_totals(&api).await;

    assert_eq!(totals.total_restaurants, 0);
    assert_eq!(totals.total_dishes, 0);
    let error = totals.error.expect("error slot must be set");
    assert!(error.contains("connection refused"));
}
