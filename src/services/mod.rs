//! Catalog services.
//!
//! Ingest, the pure filter/sort pipeline, the catalog store and the session
//! shell that hosts drive.

mod catalog;
mod debounce;
mod filter;
mod ingest;
mod query_parser;
mod session;
mod sort;

pub use catalog::CatalogStore;
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use filter::{apply_filters, has_all_tags, matches_search, visible_indices};
pub use ingest::{Catalog, IngestError};
pub use query_parser::parse_filter_query;
pub use session::LibrarySession;
pub use sort::{TitleKey, compare_dates, compare_titles, sort_records};
