//! carta - Restaurant catalog browser.
//!
//! The main entry point for the `carta` CLI binary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carta_cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match cli.command {
            Commands::Totals => carta_cli::commands::totals::execute(&config).await,
            Commands::Menu(args) => carta_cli::commands::menu::execute(&args, &config).await,
            Commands::Search(args) => carta_cli::commands::search::execute(&args, &config).await,
        }
    })
}
