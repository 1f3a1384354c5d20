//! CLI command implementations.

pub mod menu;
pub mod search;
pub mod totals;
