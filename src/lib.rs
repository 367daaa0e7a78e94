//! Galleria Library
//!
//! This library provides core functionality for the Galleria catalog
//! browser, including the embedded item catalog, category queries, and the
//! terminal user interface.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
