//! Totals command - the aggregate counts dashboard.

use anyhow::Result;
use owo_colors::OwoColorize;

use carta_client::ApiClient;
use carta_session::load_totals;

use crate::{Config, OutputFormat};

/// Execute the totals command.
///
/// Count fetch failures degrade to zero counts plus a visible error
/// line; they never fail the command.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed or
/// JSON output cannot be serialized.
pub async fn execute(config: &Config) -> Result<()> {
    let api = ApiClient::new(&config.api_url)?;
    let totals = load_totals(&api).await;

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&totals)?);
        }
        OutputFormat::Text => {
            if let Some(error) = &totals.error {
                eprintln!("{}", error.red());
            }
            println!("Total restaurants: {}", totals.total_restaurants.bold());
            println!("Total dishes:      {}", totals.total_dishes.bold());
        }
    }

    Ok(())
}
