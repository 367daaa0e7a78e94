//! Galleria - Terminal catalog browser
//!
//! This application provides an interactive browser for a categorized item
//! catalog: a home screen listing categories and a category screen showing
//! the filtered item grid with expandable cards.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use galleria::catalog::CatalogDb;
use galleria::cli::{CategoriesArgs, ItemsArgs};
use galleria::config::Config;
use galleria::constants::APP_BINARY_NAME;
use galleria::tui;

/// Galleria - Terminal catalog browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Headless subcommand (omit to start the interactive browser)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load the catalog from a custom JSON file
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Open the browser directly on a category screen
    #[arg(long, value_name = "ID")]
    category: Option<String>,
}

/// Headless subcommands for scripting.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List all categories
    Categories(CategoriesArgs),
    /// List the items of one category
    Items(ItemsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or create default config
    let config = Config::load().unwrap_or_else(|_| Config::default());

    // Catalog source: --catalog flag wins over the configured path,
    // otherwise the embedded dataset is used.
    let catalog_path = cli.catalog.as_ref().or(config.catalog.path.as_ref());
    let catalog = match catalog_path {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Catalog file not found: {}", path.display());
                eprintln!();
                eprintln!("Please provide a valid path to a catalog JSON file.");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {APP_BINARY_NAME} --catalog my_catalog.json");
                eprintln!("  {APP_BINARY_NAME} --catalog path/to/catalog.json");
                std::process::exit(1);
            }
            CatalogDb::load_from_path(path)?
        }
        None => CatalogDb::load()?,
    };

    // Headless subcommands bypass the TUI entirely
    if let Some(command) = cli.command {
        let result = match command {
            Commands::Categories(args) => args.execute(&catalog),
            Commands::Items(args) => args.execute(&catalog),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        return Ok(());
    }

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(catalog, config);

    // Optionally jump straight into a category screen
    if let Some(category_id) = &cli.category {
        app_state.open_category(category_id);
    }

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
