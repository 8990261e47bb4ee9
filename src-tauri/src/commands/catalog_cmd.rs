//! Catalog Commands
//!
//! Tauri command the frontend invokes once on mount to load the catalog.

use tauri::State;

use crate::AppState;
use crate::catalog::CatalogSource;
use crate::domain::{DomainResult, Product};

#[tauri::command]
pub async fn fetch_products(
    state: State<'_, AppState>,
) -> Result<Vec<Product>, String> {
    load_catalog(state.catalog.as_ref()).await.map_err(|e| e.to_string())
}

/// Read the whole catalog once, logging the outcome
pub async fn load_catalog(source: &dyn CatalogSource) -> DomainResult<Vec<Product>> {
    match source.fetch_all().await {
        Ok(products) => {
            tracing::info!(count = products.len(), "Catalog loaded");
            Ok(products)
        }
        Err(e) => {
            tracing::error!(error = %e, "Catalog fetch failed");
            Err(e)
        }
    }
}
