//! `galleria items` - list the items of one category.

use clap::Args;
use serde::Serialize;

use crate::catalog::{CatalogDb, ItemSource};
use crate::cli::common::{CliError, CliResult};
use crate::models::{display_title, Item};

/// List all items in a category
#[derive(Debug, Clone, Args)]
pub struct ItemsArgs {
    /// Category identifier (matched case-insensitively)
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListItemsResponse {
    category: String,
    items: Vec<Item>,
    count: usize,
}

impl ItemsArgs {
    /// Execute the items command
    pub fn execute(&self, catalog: &CatalogDb) -> CliResult<()> {
        if self.category.is_empty() {
            return Err(CliError::validation("Category identifier cannot be empty"));
        }

        let items: Vec<Item> = catalog
            .items_for_category(&self.category)
            .into_iter()
            .cloned()
            .collect();

        let response = ListItemsResponse {
            category: self.category.clone(),
            count: items.len(),
            items,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            // A normal empty result, not an error
            println!("No items found in this category.");
        } else {
            println!(
                "Items in {} ({}):",
                display_title(&self.category),
                response.count
            );
            println!();
            for item in response.items {
                println!(
                    "  {:>3}  {:<20} {:>4}/100  {}",
                    item.id,
                    item.name,
                    item.score.unwrap_or(0),
                    item.link.as_deref().unwrap_or("-")
                );
            }
        }

        Ok(())
    }
}
