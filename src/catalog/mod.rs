//! Catalog store: the item dataset and category queries.
//!
//! This module provides access to the embedded item catalog, the
//! `ItemSource` provider abstraction, and the simulated fetch used by the
//! TUI to stand in for a future network round-trip.

pub mod fetch;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::models::{Category, Item};

/// A source of catalog items, queryable by category identifier.
///
/// This is the seam between the presentation layer and the data: consumers
/// depend on this trait rather than on `CatalogDb`, so the embedded mock
/// dataset can be swapped for a remote-backed source without touching them.
pub trait ItemSource {
    /// Returns every item whose category matches `category_id`
    /// case-insensitively, preserving source order.
    ///
    /// Total over its input: an unmatched category yields an empty vec, not
    /// an error. Pure: no side effects, repeated calls yield equal results.
    fn items_for_category(&self, category_id: &str) -> Vec<&Item>;
}

/// Catalog schema from catalog.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    version: String,
    categories: Vec<Category>,
    items: Vec<Item>,
}

/// The item catalog with category queries and id lookup.
///
/// The default dataset is embedded in the binary at compile time; a custom
/// catalog with the same JSON shape can be loaded from disk instead. The
/// catalog is immutable after load.
#[derive(Debug, Clone)]
pub struct CatalogDb {
    /// All items, in source order
    items: Vec<Item>,
    /// Category definitions, in source order
    categories: Vec<Category>,
    /// Fast lookup by item id
    lookup: HashMap<u64, usize>,
}

impl CatalogDb {
    /// Loads the catalog from the embedded JSON dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use galleria::catalog::CatalogDb;
    ///
    /// let db = CatalogDb::load().unwrap();
    /// assert!(db.item_count() > 0);
    /// ```
    pub fn load() -> Result<Self> {
        let json_data = include_str!("catalog.json");
        Self::from_json(json_data).context("Failed to parse embedded catalog.json")
    }

    /// Loads a catalog from a JSON file on disk.
    ///
    /// The file must have the same shape as the embedded dataset: a
    /// `version` string, a `categories` array, and an `items` array.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json_data = std::fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&json_data)
            .context(format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Parses and validates a catalog from a JSON string.
    fn from_json(json_data: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json_data)?;

        let mut lookup = HashMap::new();
        for (idx, item) in data.items.iter().enumerate() {
            if lookup.insert(item.id, idx).is_some() {
                anyhow::bail!("Duplicate item id {} in catalog", item.id);
            }
        }

        let mut seen_categories = Vec::new();
        for category in &data.categories {
            Category::validate_id(&category.id)
                .context(format!("Invalid category id '{}'", category.id))?;
            if seen_categories.contains(&category.id) {
                anyhow::bail!("Duplicate category id '{}' in catalog", category.id);
            }
            seen_categories.push(category.id.clone());
        }

        Ok(Self {
            items: data.items,
            categories: data.categories,
            lookup,
        })
    }

    /// Gets an item by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Item> {
        let idx = self.lookup.get(&id)?;
        self.items.get(*idx)
    }

    /// Gets all items, in source order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Gets all categories, in source order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Gets a category by id.
    #[must_use]
    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Gets the total number of items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Gets the total number of categories.
    #[must_use]
    pub const fn category_count(&self) -> usize {
        self.categories.len()
    }
}

impl ItemSource for CatalogDb {
    /// Answers "which items belong to this category?" with a full linear
    /// scan. The dataset is small enough that scanning per query is the
    /// intended behavior; there is no index to keep in sync.
    fn items_for_category(&self, category_id: &str) -> Vec<&Item> {
        let wanted = category_id.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.category.to_lowercase() == wanted)
            .collect()
    }
}
