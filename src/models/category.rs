//! Category system for partitioning catalog items.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A browsable category of catalog items.
///
/// Categories partition the catalog (e.g., "electronics", "services") and
/// carry the display name and icon shown on the home screen. Items refer to
/// a category by its identifier; the match is case-insensitive and performed
/// at query time, never stored.
///
/// # Validation
///
/// - ID must be unique within a catalog
/// - ID format: kebab-case (lowercase, hyphens only, no spaces)
/// - Name must be non-empty, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier in kebab-case (e.g., "electronics", "software")
    pub id: String,
    /// Display name (e.g., "Electronics", "Software")
    pub name: String,
    /// Icon shown next to the name (a single emoji or short glyph)
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Creates a new Category with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use galleria::models::Category;
    ///
    /// let category = Category::new("electronics", "Electronics", "📱").unwrap();
    /// assert_eq!(category.id, "electronics");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty or not in kebab-case format
    /// - Name is empty or exceeds 50 characters
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        Self::validate_id(&id)?;
        Self::validate_name(&name)?;

        Ok(Self {
            id,
            name,
            icon: icon.into(),
        })
    }

    /// Validates category ID format (kebab-case).
    pub(crate) fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            anyhow::bail!("Category ID cannot be empty");
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Category ID '{id}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if id.starts_with('-') || id.ends_with('-') {
            anyhow::bail!("Category ID '{id}' cannot start or end with a hyphen");
        }

        Ok(())
    }

    /// Validates category name.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Category name cannot be empty");
        }

        if name.len() > 50 {
            anyhow::bail!(
                "Category name '{}' exceeds maximum length of 50 characters (got {})",
                name,
                name.len()
            );
        }

        Ok(())
    }
}

/// Builds the display title for a category identifier taken from a route.
///
/// The identifier is shown verbatim with its first character upper-cased;
/// no other normalization is applied. An empty identifier yields an empty
/// title.
///
/// # Examples
///
/// ```
/// use galleria::models::display_title;
///
/// assert_eq!(display_title("electronics"), "Electronics");
/// assert_eq!(display_title("SOFTWARE"), "SOFTWARE");
/// ```
#[must_use]
pub fn display_title(category_id: &str) -> String {
    let mut chars = category_id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let category = Category::new("electronics", "Electronics", "📱").unwrap();

        assert_eq!(category.id, "electronics");
        assert_eq!(category.name, "Electronics");
        assert_eq!(category.icon, "📱");
    }

    #[test]
    fn test_validate_id_valid() {
        assert!(Category::validate_id("electronics").is_ok());
        assert!(Category::validate_id("power-tools").is_ok());
        assert!(Category::validate_id("tier-1").is_ok());
    }

    #[test]
    fn test_validate_id_invalid() {
        assert!(Category::validate_id("").is_err());
        assert!(Category::validate_id("Electronics").is_err()); // uppercase
        assert!(Category::validate_id("power tools").is_err()); // space
        assert!(Category::validate_id("power_tools").is_err()); // underscore
        assert!(Category::validate_id("-electronics").is_err()); // starts with hyphen
        assert!(Category::validate_id("electronics-").is_err()); // ends with hyphen
    }

    #[test]
    fn test_validate_name_invalid() {
        assert!(Category::new("test", "", "").is_err());
        assert!(Category::new("test", "a".repeat(51), "").is_err());
    }

    #[test]
    fn test_display_title_capitalizes_first_char() {
        assert_eq!(display_title("electronics"), "Electronics");
        assert_eq!(display_title("software"), "Software");
    }

    #[test]
    fn test_display_title_preserves_rest_verbatim() {
        // Only the first character changes; the rest is not normalized
        assert_eq!(display_title("eLECTRONICS"), "ELECTRONICS");
        assert_eq!(display_title("SOFTWARE"), "SOFTWARE");
        assert_eq!(display_title("power-tools"), "Power-tools");
    }

    #[test]
    fn test_display_title_empty() {
        assert_eq!(display_title(""), "");
    }

    #[test]
    fn test_display_title_single_char() {
        assert_eq!(display_title("x"), "X");
    }
}
