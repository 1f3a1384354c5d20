//! # carta-cli
//!
//! Command-line interface for browsing the carta restaurant catalog.
//!
//! ## Commands
//!
//! - `carta totals` - Show aggregate restaurant/dish counts
//! - `carta menu <restaurant-id>` - Render a restaurant's organized menu
//! - `carta search <restaurant-id> <query>` - Search dishes by name
//!
//! ## Configuration
//!
//! The CLI uses environment variables or command-line flags for
//! settings:
//!
//! - `CARTA_API_URL` - API endpoint (default: `http://localhost:3001`)

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]
// CLI uses print! macros intentionally
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

/// carta - Restaurant catalog browser.
#[derive(Debug, Parser)]
#[command(name = "carta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API server URL.
    #[arg(long, env = "CARTA_API_URL", default_value = "http://localhost:3001")]
    pub api_url: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the effective configuration.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            format: self.format,
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show aggregate restaurant/dish counts.
    Totals,
    /// Render a restaurant's organized menu.
    Menu(commands::menu::MenuArgs),
    /// Search a restaurant's dishes by name.
    Search(commands::search::SearchArgs),
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Effective CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API server URL.
    pub api_url: String,
    /// Output format.
    pub format: OutputFormat,
}
