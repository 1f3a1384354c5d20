//! Shared test utilities for carta session and CLI tests.
//!
//! This crate provides:
//! - [`ScriptedApi`]: in-memory `CatalogApi` with operation recording
//!   and gated search resolution for ordering tests
//! - Factory functions for dishes, categories, and menu payloads
//!
//! # Example
//!
//! ```rust,ignore
//! use carta_test_utils::{fixtures, ScriptedApi};
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let api = ScriptedApi::new().with_totals(3, 42);
//!     // ... run test ...
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
// Test utilities use expect/unwrap for cleaner test code.
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

pub mod api;
pub mod fixtures;

pub use api::{ApiOp, ScriptedApi, SearchGate};
pub use fixtures::*;

/// Initialize test logging (call once per test module).
pub fn init_test_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
