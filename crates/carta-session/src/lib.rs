//! # carta-session
//!
//! The stateful core of the carta client: [`CatalogSession`] owns the
//! fetched dish/category collections for one restaurant view,
//! [`SearchOverlay`] runs the search state machine that replaces the
//! organized tree while active, and [`load_totals`] feeds the counts
//! dashboard.
//!
//! Data flows one way: remote fetch → session state → organizer/overlay
//! → rendered view. Mutations elsewhere flow back only by triggering a
//! full refetch; nothing patches the in-memory tree incrementally.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod dashboard;
pub mod search;
pub mod session;

pub use dashboard::{load_totals, DashboardTotals};
pub use search::{normalize_query, SearchOverlay, SearchState};
pub use session::{CatalogSession, SessionPhase, SessionView};
