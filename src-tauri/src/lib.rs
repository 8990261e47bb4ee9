//! Storefront Shell
//!
//! Layered architecture:
//! - domain: Catalog entities and errors
//! - catalog: Where products come from
//! - commands: Tauri command handlers

use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod catalog;
mod commands;

use catalog::{CatalogSource, HttpCatalog};
use config::CatalogConfig;

/// Application state shared across commands
pub struct AppState {
    pub catalog: Box<dyn CatalogSource>,
}

/// Install the fmt subscriber; a second call is a no-op
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    let catalog = HttpCatalog::new(CatalogConfig::default());
    tracing::info!(endpoint = catalog.endpoint(), "Storefront starting");

    tauri::Builder::default()
        .manage(AppState {
            catalog: Box::new(catalog),
        })
        .invoke_handler(tauri::generate_handler![
            commands::fetch_products,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
