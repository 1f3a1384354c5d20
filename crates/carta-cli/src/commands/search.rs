//! Search command - one free-text dish lookup.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use carta_client::{ApiClient, CatalogApi};
use carta_model::RestaurantId;
use carta_session::{SearchOverlay, SearchState};

use crate::{Config, OutputFormat};

/// Arguments for the search command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Restaurant to search within.
    #[arg()]
    pub restaurant_id: String,

    /// Free-text query; trimmed and case-folded before lookup.
    #[arg()]
    pub query: String,
}

/// Execute the search command.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or JSON
/// output cannot be serialized. A failed lookup prints a failure line
/// instead of failing the command.
pub async fn execute(args: &SearchArgs, config: &Config) -> Result<()> {
    let api: Arc<dyn CatalogApi> = Arc::new(ApiClient::new(&config.api_url)?);
    let overlay = SearchOverlay::new(api, RestaurantId::new(&args.restaurant_id));

    let state = overlay.search(&args.query).await;

    if config.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    match state {
        SearchState::Inactive => {
            println!("Nothing to search for.");
        }
        SearchState::Results(hits) => {
            for hit in &hits {
                let place = match &hit.sub_category_name {
                    Some(sub) => format!("{} / {sub}", hit.category_name),
                    None => hit.category_name.clone(),
                };
                match hit.dish.price {
                    Some(price) => println!("{} - {place} ({price:.2})", hit.dish.name.bold()),
                    None => println!("{} - {place}", hit.dish.name.bold()),
                }
            }
        }
        SearchState::Empty { .. } => {
            println!("No dishes found matching your search.");
        }
        SearchState::Failed { query } => {
            eprintln!("{}", format!("Search for \"{query}\" failed.").red());
        }
        // search() never returns a pending state.
        SearchState::Pending { .. } => {}
    }

    Ok(())
}
