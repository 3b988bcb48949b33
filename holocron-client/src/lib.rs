//! Holocron client - catalog data orchestration.
//!
//! Fetching, caching, and composition for the gallery: paginated collection
//! queries, on-demand homeworld resolution, local search/filter
//! composition, and race-safe selection state. The terminal UI lives in
//! `holocron-tui`; nothing here draws anything.

pub mod cache;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod resolver;
pub mod session;
pub mod transport;
pub mod types;
pub mod view;

pub use cache::EntityCache;
pub use catalog::CatalogService;
pub use error::FetchError;
pub use gallery::{Gallery, GalleryError, PageLoad, PageRequest};
pub use resolver::HomeworldResolver;
pub use session::{HomeworldState, ResolveTicket, Session};
pub use transport::{CatalogTransport, HttpCatalog};
pub use types::{Character, FilterMode, FilterModeParseError, Page, Planet, ViewFilters};
pub use view::compose_view;
