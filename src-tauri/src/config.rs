//! Catalog Configuration
//!
//! Compiled-in settings for the catalog source.

/// Products endpoint of the public fake store API
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// URL answering `GET` with a JSON array of products
    pub endpoint: String,
}

impl CatalogConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_ENDPOINT)
    }
}
