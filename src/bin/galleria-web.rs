//! Galleria Web Server Binary
//!
//! This binary starts the Galleria web server that provides a REST API
//! over the item catalog for a web-based frontend.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, embedded catalog)
//! galleria-web
//!
//! # Specify port and a custom catalog
//! galleria-web --port 8080 --catalog ~/my-catalog.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use galleria::catalog::CatalogDb;
use galleria::config::Config;
use galleria::web;

/// Galleria Web Server - REST API over the item catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Load the catalog from a custom JSON file.
    /// Defaults to the configured catalog path, then the embedded dataset.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration
    let config = Config::load().unwrap_or_default();

    // Catalog source: --catalog flag, then config, then the embedded dataset
    let catalog = match args.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            CatalogDb::load_from_path(path)?
        }
        None => CatalogDb::load()?,
    };

    info!(
        "Serving {} items in {} categories",
        catalog.item_count(),
        catalog.category_count()
    );

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(catalog, addr).await
}
