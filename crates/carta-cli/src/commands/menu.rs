//! Menu command - render a restaurant's organized catalog tree.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use carta_client::{ApiClient, CatalogApi};
use carta_model::{CatalogTree, Dish, RestaurantId};
use carta_session::{CatalogSession, SessionPhase, SessionView};

use crate::{Config, OutputFormat};

/// Arguments for the menu command.
#[derive(Debug, Args)]
pub struct MenuArgs {
    /// Restaurant to render the menu for.
    #[arg()]
    pub restaurant_id: String,
}

/// Execute the menu command.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or JSON
/// output cannot be serialized. A failed menu fetch prints the error
/// banner instead of failing the command.
pub async fn execute(args: &MenuArgs, config: &Config) -> Result<()> {
    let api: Arc<dyn CatalogApi> = Arc::new(ApiClient::new(&config.api_url)?);
    let mut session = CatalogSession::new(api, RestaurantId::new(&args.restaurant_id));
    session.load().await;

    if let SessionPhase::Error(message) = session.phase() {
        eprintln!("{}", message.red());
        return Ok(());
    }

    let SessionView::Tree(tree) = session.view() else {
        // A freshly loaded session has no active search.
        return Ok(());
    };

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        OutputFormat::Text => {
            render_tree(&session.restaurant_name(), &tree);
        }
    }

    Ok(())
}

fn render_tree(restaurant_name: &str, tree: &CatalogTree) {
    println!("{}", format!("Dishes for {restaurant_name}").bold());

    if tree.is_empty() {
        println!("  (no dishes)");
        return;
    }

    for section in &tree.sections {
        let has_dishes =
            !section.direct.is_empty() || section.groups.iter().any(|g| !g.dishes.is_empty());
        if !has_dishes {
            continue;
        }

        println!();
        println!("{}", section.name.green().bold());
        for dish in &section.direct {
            print_dish(dish, 1);
        }
        for group in &section.groups {
            if group.dishes.is_empty() {
                continue;
            }
            println!("  {}", group.name.green());
            for dish in &group.dishes {
                print_dish(dish, 2);
            }
        }
    }

    if !tree.uncategorized.is_empty() {
        println!();
        println!("{}", "Uncategorized".yellow().bold());
        for dish in &tree.uncategorized {
            print_dish(dish, 1);
        }
    }
}

fn print_dish(dish: &Dish, depth: usize) {
    let indent = "  ".repeat(depth);
    match dish.price {
        Some(price) => println!("{indent}{} ({price:.2})", dish.name),
        None => println!("{indent}{}", dish.name),
    }
}
