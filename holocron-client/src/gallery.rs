//! Gallery orchestration: pagination, filters, and selection in one place.
//!
//! This is the surface the presentation layer talks to. It never performs
//! network I/O itself: `request_page` and `select` hand back tokens, the
//! caller runs the fetch through [`crate::catalog::CatalogService`] or
//! [`crate::resolver::HomeworldResolver`], and the outcome comes back in
//! through `apply_page` / `apply_homeworld`, which drop anything stale.

use crate::error::FetchError;
use crate::session::{HomeworldState, ResolveTicket, Session};
use crate::types::{Character, FilterMode, Page, Planet, ViewFilters};
use crate::view::compose_view;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("page {requested} is outside the valid page range")]
    InvalidPage { requested: u32 },
}

/// Load state of the current page. `Failed` replaces the previous page
/// entirely; a stale page is never shown next to an error.
#[derive(Debug, Clone, Default)]
pub enum PageLoad {
    #[default]
    Idle,
    Loading,
    Ready(Page<Character>),
    Failed(FetchError),
}

/// Token for a validated page request; echo it back to `apply_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
}

pub struct Gallery {
    filters: ViewFilters,
    session: Session,
    current_page: u32,
    total_pages: Option<u32>,
    load: PageLoad,
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            filters: ViewFilters::default(),
            session: Session::new(),
            current_page: 1,
            total_pages: None,
            load: PageLoad::Idle,
        }
    }

    // ------------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------------

    /// Validate and register a page change. Page numbers are 1-based; once
    /// the collection size is known, numbers past the last page are
    /// rejected rather than clamped. Callers clamp before calling.
    pub fn request_page(&mut self, page: u32) -> Result<PageRequest, GalleryError> {
        if page == 0 {
            return Err(GalleryError::InvalidPage { requested: page });
        }
        if let Some(total) = self.total_pages {
            if page > total {
                return Err(GalleryError::InvalidPage { requested: page });
            }
        }
        self.current_page = page;
        self.load = PageLoad::Loading;
        Ok(PageRequest { page })
    }

    /// Accept a page fetch outcome. An answer for a page the user has
    /// already navigated away from is dropped. Returns whether it was
    /// applied.
    pub fn apply_page(&mut self, page: u32, outcome: Result<Page<Character>, FetchError>) -> bool {
        if page != self.current_page {
            tracing::debug!(page, current = self.current_page, "stale page outcome dropped");
            return false;
        }
        match outcome {
            Ok(served) => {
                self.total_pages = Some(served.total_pages());
                self.load = PageLoad::Ready(served);
            }
            Err(error) => {
                self.load = PageLoad::Failed(error);
            }
        }
        true
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Unknown until the first page has been served.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn load(&self) -> &PageLoad {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, PageLoad::Loading)
    }

    // ------------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------------

    /// Local only; changing the search never touches the network.
    pub fn set_search_text(&mut self, text: String) {
        self.filters.search_text = text;
    }

    /// Local only; changing the mode never touches the network.
    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filters.filter_mode = mode;
    }

    pub fn filters(&self) -> &ViewFilters {
        &self.filters
    }

    /// The characters to render: the served page run through the search
    /// and filter predicates. Empty while no page is ready.
    pub fn visible(&self) -> Vec<&Character> {
        match &self.load {
            PageLoad::Ready(page) => compose_view(&page.items, &self.filters),
            _ => Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn select(&mut self, character: Character) -> Option<ResolveTicket> {
        self.session.select(character)
    }

    pub fn apply_homeworld(&mut self, generation: u64, outcome: Result<Planet, FetchError>) -> bool {
        self.session.apply(generation, outcome)
    }

    pub fn dismiss(&mut self) {
        self.session.dismiss();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn homeworld(&self) -> &HomeworldState {
        self.session.homeworld()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("current_page", &self.current_page)
            .field("total_pages", &self.total_pages)
            .field("filters", &self.filters)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
