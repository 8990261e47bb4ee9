//! HTTP Catalog Source
//!
//! Issues a single `GET` against the configured endpoint. No retry and no
//! timeout: a failed read is reported once and the caller decides what to do.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;
use crate::domain::{DomainError, DomainResult, Product};
use super::traits::CatalogSource;

pub struct HttpCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: CatalogConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    #[instrument(name = "catalog_fetch_all", skip(self), fields(endpoint = %self.config.endpoint))]
    async fn fetch_all(&self) -> DomainResult<Vec<Product>> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;
        debug!(bytes = body.len(), "Catalog body received");

        serde_json::from_slice::<Vec<Product>>(&body).map_err(|e| DomainError::Decode(e.to_string()))
    }
}
