//! Web API module for Galleria.
//!
//! This module provides the REST API that a web frontend would use in
//! place of the embedded dataset: the item query is keyed by category
//! identifier and returns the same item shape the TUI renders.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/categories` - List categories
//! - `GET /api/items` - List items (optional ?category=)
//! - `GET /api/items/{id}` - Get a single item

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::{CatalogDb, ItemSource};
use crate::models::{Category, Item};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Item catalog (immutable after load)
    catalog: Arc<CatalogDb>,
}

impl AppState {
    /// Creates a new application state around a loaded catalog.
    #[must_use]
    pub fn new(catalog: CatalogDb) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Category list response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// List of categories.
    pub categories: Vec<CategoryInfo>,
}

/// Category information for API response.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    /// Unique category identifier.
    pub id: String,
    /// Human-readable category name.
    pub name: String,
    /// Icon shown next to the name.
    pub icon: String,
}

impl From<&Category> for CategoryInfo {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            icon: category.icon.clone(),
        }
    }
}

/// Query parameters for the item list.
#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    /// Category identifier to filter by (matched case-insensitively).
    pub category: Option<String>,
}

/// Item list response.
#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    /// List of matching items.
    pub items: Vec<ItemInfo>,
    /// Total count of matching items.
    pub total: usize,
}

/// Item information for API response.
#[derive(Debug, Serialize)]
pub struct ItemInfo {
    /// Unique item identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Body text shown when expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shorter body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Category this item belongs to.
    pub category: String,
    /// Quality score on a 0-100 scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    /// External details URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl From<&Item> for ItemInfo {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            summary: item.summary.clone(),
            category: item.category.clone(),
            score: item.score,
            link: item.link.clone(),
        }
    }
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/categories - List categories.
async fn list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let categories = state
        .catalog
        .categories()
        .iter()
        .map(CategoryInfo::from)
        .collect();

    Json(CategoryListResponse { categories })
}

/// GET /api/items - List items, optionally filtered by category.
///
/// An unknown category yields an empty list with status 200; it is a
/// normal empty result, not an error.
async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Json<ItemListResponse> {
    let items: Vec<ItemInfo> = match &query.category {
        Some(category) => state
            .catalog
            .items_for_category(category)
            .into_iter()
            .map(ItemInfo::from)
            .collect(),
        None => state.catalog.items().iter().map(ItemInfo::from).collect(),
    };

    let total = items.len();
    Json(ItemListResponse { items, total })
}

/// GET /api/items/{id} - Get a single item by id.
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ItemInfo>, (StatusCode, Json<ApiError>)> {
    state.catalog.get(id).map(ItemInfo::from).map(Json).ok_or((
        StatusCode::NOT_FOUND,
        Json(ApiError::new(format!("Item {id} not found"))),
    ))
}

// ============================================================================
// Router
// ============================================================================

/// Creates the API router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development.
    // The server is designed to run locally on the user's machine alongside
    // the frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog endpoints
        .route("/api/categories", get(list_categories))
        .route("/api/items", get(list_items))
        .route("/api/items/{id}", get(get_item))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or start.
pub async fn run_server(catalog: CatalogDb, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(catalog);
    let app = create_router(state);

    info!("Starting Galleria web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
