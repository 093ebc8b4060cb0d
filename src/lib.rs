//! # nftlib
//!
//! Catalog browser core for a static NFT gallery.
//!
//! nftlib loads a collection of item records, lets a host filter them by
//! collection, blockchain, tags and free text, sorts the result, and turns
//! the visible subset into a neutral render description (cards, stats, tag
//! buttons, result count) that any UI can draw.
//!
//! ## Features
//!
//! - Tolerant ingest of a single record or an array of records
//! - Pure, deterministic filter and sort pipeline
//! - Render descriptions with all interpolated text HTML-escaped
//! - Session shell owning mutation, debounced search and `reset_filters`
//! - Catalog loading from local files or `http(s)` URLs
//!
//! ## Example
//!
//! ```rust
//! use nftlib::{Catalog, LibrarySession, Locale};
//!
//! let payload = serde_json::json!([
//!     {"title": "A", "collection": "X", "blockchain": "Ethereum",
//!      "tags": ["rare"], "date": "2024-01-01", "status": "published"},
//!     {"title": "B", "collection": "Y", "blockchain": "Polygon",
//!      "tags": [], "date": "2024-06-01", "status": "draft"}
//! ]);
//!
//! let catalog = Catalog::ingest(&payload).unwrap_or_default();
//! let mut session = LibrarySession::new(catalog, Locale::En);
//! let view = session.set_search("a");
//! assert_eq!(view.stats.total, 1);
//! assert_eq!(view.cards.len(), 1);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod io;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod services;

// Re-exports for convenience
pub use config::LibraryConfig;
pub use io::{Loader, Source};
pub use models::{AboutInfo, FilterConfig, Record, Selection, SortOrder};
pub use rendering::{Locale, RenderDescription, describe_view, escape_html};
pub use services::{
    Catalog, CatalogStore, Debouncer, IngestError, LibrarySession, apply_filters,
    parse_filter_query,
};

/// Error type for nftlib operations.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Unknown sort order, malformed config values |
/// | `OperationFailed` | File or HTTP reads fail, JSON or TOML cannot be parsed |
/// | `Ingest` | The catalog payload has an unsupported shape |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - A catalog or about document cannot be read or fetched
    /// - A document is not valid JSON
    /// - A configuration file cannot be parsed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// The catalog payload could not be ingested.
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Result type alias for nftlib operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "read_catalog".to_string(),
            cause: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'read_catalog' failed: not found");

        let err = Error::from(IngestError::UnsupportedShape("number".to_string()));
        assert_eq!(
            err.to_string(),
            "catalog payload must be an object or an array of objects, got number"
        );
    }
}
