//! `galleria categories` - list the catalog's categories.

use clap::Args;
use serde::Serialize;

use crate::catalog::{CatalogDb, ItemSource};
use crate::cli::common::{CliError, CliResult};

/// List all categories in the catalog
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryRow {
    id: String,
    name: String,
    icon: String,
    item_count: usize,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryRow>,
    count: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self, catalog: &CatalogDb) -> CliResult<()> {
        let categories: Vec<CategoryRow> = catalog
            .categories()
            .iter()
            .map(|category| CategoryRow {
                id: category.id.clone(),
                name: category.name.clone(),
                icon: category.icon.clone(),
                item_count: catalog.items_for_category(&category.id).len(),
            })
            .collect();

        let response = ListCategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No categories defined.");
        } else {
            println!("Categories ({}):", response.count);
            println!();
            for category in response.categories {
                println!(
                    "  {:<16} {:<20} {} items",
                    category.id, category.name, category.item_count
                );
            }
        }

        Ok(())
    }
}
