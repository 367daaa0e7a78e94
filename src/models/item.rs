//! Catalog item data structure.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Items are static data: created once when the catalog loads and never
/// mutated afterwards. The `category` field is a free-form string matched
/// case-insensitively against a requested category identifier.
///
/// # Validation
///
/// - `id` must be unique within the parent catalog (enforced at load)
/// - `score` is semantically a 0-100 value; out-of-range scores are passed
///   through to the display layer rather than clamped or rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned at data-creation time
    pub id: u64,
    /// Display name (e.g., "Product Alpha")
    pub name: String,
    /// Primary body text shown when the item is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shorter body text, used when `description` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Category identifier this item belongs to (matched case-insensitively)
    pub category: String,
    /// Quality score on a 0-100 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// External details URL; when absent no link affordance is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Item {
    /// Creates a new `Item` with the given identity, name, and category.
    pub fn new(id: u64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            summary: None,
            category: category.into(),
            score: None,
            link: None,
        }
    }

    /// Sets the description body text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the summary body text.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the score.
    #[must_use]
    pub const fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }

    /// Sets the external details link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}
