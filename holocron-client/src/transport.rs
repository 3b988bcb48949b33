//! HTTP transport for the catalog API.
//!
//! The rest of the crate only sees the [`CatalogTransport`] trait; the
//! reqwest-backed implementation lives here so tests can substitute their
//! own transport.

use crate::error::FetchError;
use crate::types::{RawPeoplePage, RawPlanet};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Narrow contract the orchestration layer depends on: fetch one collection
/// page, fetch one planet record. Read-only; no other endpoints are used.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    async fn people_page(&self, page: u32) -> Result<RawPeoplePage, FetchError>;
    async fn planet(&self, url: &str) -> Result<RawPlanet, FetchError>;
}

/// Catalog transport over HTTP.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Planet references arrive either as absolute URLs or as paths relative
    /// to the catalog root.
    fn resolve_url(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_string()
        } else {
            format!("{}/{}", self.base_url, reference.trim_start_matches('/'))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        tracing::debug!(%url, "catalog GET");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogTransport for HttpCatalog {
    async fn people_page(&self, page: u32) -> Result<RawPeoplePage, FetchError> {
        let url = format!("{}/people/?page={}", self.base_url, page);
        self.get_json(url).await
    }

    async fn planet(&self, url: &str) -> Result<RawPlanet, FetchError> {
        self.get_json(self.resolve_url(url)).await
    }
}

impl std::fmt::Debug for HttpCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalog")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> HttpCatalog {
        HttpCatalog::new("https://catalog.test/api/", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        assert_eq!(catalog().base_url, "https://catalog.test/api");
    }

    #[test]
    fn absolute_references_pass_through() {
        let url = catalog().resolve_url("https://elsewhere.test/planets/3/");
        assert_eq!(url, "https://elsewhere.test/planets/3/");
    }

    #[test]
    fn relative_references_join_the_base() {
        let url = catalog().resolve_url("/planets/3/");
        assert_eq!(url, "https://catalog.test/api/planets/3/");
    }
}
