//! Catalog Layer - Core Traits
//!
//! Abstract source of the product catalog. The shell ships an HTTP
//! implementation; tests substitute in-memory ones.

use async_trait::async_trait;
use crate::domain::{DomainResult, Product};

/// Read-only access to the full product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product in one request
    async fn fetch_all(&self) -> DomainResult<Vec<Product>>;
}
