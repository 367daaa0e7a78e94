//! CLI command handlers for Galleria.
//!
//! This module provides headless, scriptable access to the catalog for
//! automation, testing, and shell pipelines.

pub mod categories;
pub mod common;
pub mod items;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult};
pub use items::ItemsArgs;
