//! Catalog retrieval.
//!
//! A [`CatalogProvider`] performs the single network call that fills the
//! catalog. [`HttpProvider`] is the real one; tests substitute their own.
//! There is no timeout or cancellation: a request that never completes
//! leaves the catalog unloaded.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::future::Future;

use crate::catalog::{Item, parse_equipment};
use crate::consts::LOCAL_CATALOG_ENDPOINT;
use crate::error::CatalogError;

/// Source of the equipment list.
pub trait CatalogProvider {
    /// Retrieve the full item list, in display order.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Item>, CatalogError>>;

    /// Human-readable location of the catalog, used in error hints.
    fn endpoint(&self) -> &str;
}

/// Fetches the catalog with one `GET` against a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpProvider {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Use a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self { endpoint: endpoint.into(), client }
    }
}

impl Default for HttpProvider {
    fn default() -> Self {
        Self::new(LOCAL_CATALOG_ENDPOINT)
    }
}

impl CatalogProvider for HttpProvider {
    async fn fetch(&self) -> Result<Vec<Item>, CatalogError> {
        log::debug!("fetching catalog from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::ProviderUnavailable { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        parse_equipment(&body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Resolve the endpoint configured on the page, falling back to `default`.
///
/// Blank values count as unset.
#[must_use]
pub fn resolve_endpoint(configured: Option<&str>, default: &str) -> String {
    configured
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_owned()
}

/// Make a root-relative endpoint absolute against the page `origin`.
///
/// Absolute endpoints are returned unchanged.
#[must_use]
pub fn absolute_endpoint(endpoint: &str, origin: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{}{endpoint}", origin.trim_end_matches('/'))
    } else {
        endpoint.to_owned()
    }
}
