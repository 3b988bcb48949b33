//! On-demand resolution of a character's homeworld.

use crate::cache::EntityCache;
use crate::error::FetchError;
use crate::transport::CatalogTransport;
use crate::types::Planet;
use std::sync::Arc;

/// Fetches planet records by reference URL, one load per planet for the
/// process lifetime. Staleness of an outcome is not decided here: the
/// selection controller compares the generation it issued with its current
/// one when the outcome is handed back.
pub struct HomeworldResolver {
    transport: Arc<dyn CatalogTransport>,
    planets: EntityCache<Planet>,
}

impl HomeworldResolver {
    pub fn new(transport: Arc<dyn CatalogTransport>) -> Self {
        Self {
            transport,
            planets: EntityCache::new(),
        }
    }

    pub async fn resolve(&self, url: &str) -> Result<Planet, FetchError> {
        let transport = Arc::clone(&self.transport);
        let target = url.to_string();
        self.planets
            .fetch_or_join(url, move || async move {
                let raw = transport.planet(&target).await?;
                Planet::from_raw(raw)
            })
            .await
    }
}

impl std::fmt::Debug for HomeworldResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeworldResolver")
            .field("cached_planets", &self.planets.len())
            .finish()
    }
}
