//! Catalog store.

use tracing::{instrument, trace};

use crate::models::{FilterConfig, Record, Selection, SortOrder};

use super::filter::visible_indices;
use super::ingest::Catalog;

/// Holds the catalog, the filter configuration and the derived visible subset.
///
/// Every mutation recomputes the visible subset from scratch; there is no
/// incremental update. No I/O happens here.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
    config: FilterConfig,
    /// Positions into `catalog.records()`, in display order.
    visible: Vec<usize>,
}

impl CatalogStore {
    /// Creates a store with the default configuration.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut store = Self {
            catalog,
            config: FilterConfig::default(),
            visible: Vec::new(),
        };
        store.recompute();
        store
    }

    /// Returns the full catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Returns the visible subset in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Record> {
        let records = self.catalog.records();
        self.visible.iter().map(|&i| &records[i]).collect()
    }

    /// Returns the number of visible records.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: FilterConfig) {
        self.config = config;
        self.recompute();
    }

    /// Selects a collection (`all` for every collection).
    pub fn set_collection(&mut self, collection: impl Into<Selection>) {
        self.config.collection = collection.into();
        self.recompute();
    }

    /// Selects a blockchain (`all` for every chain).
    pub fn set_blockchain(&mut self, blockchain: impl Into<Selection>) {
        self.config.blockchain = blockchain.into();
        self.recompute();
    }

    /// Toggles a required tag. Returns true if the tag is now active.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let active = self.config.toggle_tag(tag);
        self.recompute();
        active
    }

    /// Sets the search term, trimmed.
    pub fn set_search(&mut self, search: &str) {
        self.config.search = search.trim().to_string();
        self.recompute();
    }

    /// Clears the search term.
    pub fn clear_search(&mut self) {
        self.config.search.clear();
        self.recompute();
    }

    /// Sets the sort order.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.config.sort = sort;
        self.recompute();
    }

    /// Restores the default configuration.
    pub fn reset_filters(&mut self) {
        self.config = FilterConfig::default();
        self.recompute();
    }

    #[instrument(level = "trace", skip(self), fields(records = self.catalog.len()))]
    fn recompute(&mut self) {
        self.visible = visible_indices(self.catalog.records(), &self.config);
        trace!(visible = self.visible.len(), "visible subset recomputed");
    }
}
