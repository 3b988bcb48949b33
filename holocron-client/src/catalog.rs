//! Paginated collection queries over the catalog.

use crate::cache::EntityCache;
use crate::error::FetchError;
use crate::transport::CatalogTransport;
use crate::types::{Character, Page};
use std::sync::Arc;

fn page_key(number: u32) -> String {
    format!("people:page:{}", number)
}

/// Serves one page of characters at a time, caching every page it has seen.
/// A page request made while the same page is already loading joins that
/// load; a repeated request for a resolved page does no network work.
pub struct CatalogService {
    transport: Arc<dyn CatalogTransport>,
    pages: EntityCache<Page<Character>>,
    page_size: u32,
}

impl CatalogService {
    /// `page_size` is the catalog's fixed page length and must be > 0.
    pub fn new(transport: Arc<dyn CatalogTransport>, page_size: u32) -> Self {
        Self {
            transport,
            pages: EntityCache::new(),
            page_size,
        }
    }

    /// Fetch page `number` (1-based). A page past the end of the collection
    /// comes back with an empty item list and the collection count intact;
    /// that is not an error. Fetch failures propagate as-is and are never
    /// retried here.
    pub async fn page(&self, number: u32) -> Result<Page<Character>, FetchError> {
        let key = page_key(number);
        let transport = Arc::clone(&self.transport);
        let page_size = self.page_size;
        let page = self
            .pages
            .fetch_or_join(&key, move || async move {
                let raw = transport.people_page(number).await?;
                let items = raw
                    .results
                    .into_iter()
                    .map(Character::from_raw)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Page {
                    items,
                    total_count: raw.count,
                    page_size,
                })
            })
            .await?;
        tracing::info!(
            page = number,
            items = page.items.len(),
            total = page.total_count,
            "page served"
        );
        Ok(page)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("page_size", &self.page_size)
            .field("cached_pages", &self.pages.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawCharacter, RawPeoplePage, RawPlanet};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubCatalog {
        count: u64,
        names_per_page: Vec<Vec<&'static str>>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubCatalog {
        fn new(count: u64, names_per_page: Vec<Vec<&'static str>>) -> Self {
            Self {
                count,
                names_per_page,
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                count: 0,
                names_per_page: Vec::new(),
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn raw_character(name: &str) -> RawCharacter {
        RawCharacter {
            name: name.to_string(),
            height: "172".to_string(),
            mass: "77".to_string(),
            created: chrono::Utc::now(),
            films: vec!["films/1".to_string()],
            species: Vec::new(),
            birth_year: "19BBY".to_string(),
            homeworld: Some("planets/1".to_string()),
        }
    }

    #[async_trait]
    impl CatalogTransport for StubCatalog {
        async fn people_page(&self, page: u32) -> Result<RawPeoplePage, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::Status(500));
            }
            let results = self
                .names_per_page
                .get(page as usize - 1)
                .map(|names| names.iter().map(|n| raw_character(n)).collect())
                .unwrap_or_default();
            Ok(RawPeoplePage {
                count: self.count,
                results,
            })
        }

        async fn planet(&self, _url: &str) -> Result<RawPlanet, FetchError> {
            Err(FetchError::Status(404))
        }
    }

    #[tokio::test]
    async fn page_maps_wire_records_and_counts() {
        let stub = Arc::new(StubCatalog::new(82, vec![vec!["Luke", "Leia"]]));
        let transport: Arc<dyn CatalogTransport> = stub.clone();
        let catalog = CatalogService::new(transport, 10);

        let page = catalog.page(1).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Luke");
        assert_eq!(page.total_count, 82);
        assert_eq!(page.total_pages(), 9);
    }

    #[tokio::test]
    async fn repeated_requests_hit_the_cache() {
        let stub = Arc::new(StubCatalog::new(82, vec![vec!["Luke"]]));
        let transport: Arc<dyn CatalogTransport> = stub.clone();
        let catalog = CatalogService::new(transport, 10);

        let first = catalog.page(1).await.unwrap();
        let second = catalog.page(1).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_not_an_error() {
        let stub = Arc::new(StubCatalog::new(82, vec![vec!["Luke"]]));
        let transport: Arc<dyn CatalogTransport> = stub.clone();
        let catalog = CatalogService::new(transport, 10);

        let page = catalog.page(99).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 82);
    }

    #[tokio::test]
    async fn fetch_failure_propagates_and_next_attempt_refetches() {
        let stub = Arc::new(StubCatalog::failing());
        let transport: Arc<dyn CatalogTransport> = stub.clone();
        let catalog = CatalogService::new(transport, 10);

        assert!(catalog.page(1).await.is_err());
        assert!(catalog.page(1).await.is_err());
        assert_eq!(stub.calls(), 2);
    }

    #[tokio::test]
    async fn distinct_pages_are_cached_separately() {
        let stub = Arc::new(StubCatalog::new(82, vec![vec!["Luke"], vec!["Han"]]));
        let transport: Arc<dyn CatalogTransport> = stub.clone();
        let catalog = CatalogService::new(transport, 10);

        let one = catalog.page(1).await.unwrap();
        let two = catalog.page(2).await.unwrap();

        assert_eq!(one.items[0].name, "Luke");
        assert_eq!(two.items[0].name, "Han");
        assert_eq!(stub.calls(), 2);
    }
}
