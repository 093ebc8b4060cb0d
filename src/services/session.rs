//! Interactive session shell.
//!
//! [`LibrarySession`] owns the mutable state of one gallery page: the
//! catalog store, the about document, the load error and the pending search
//! input. Each interaction mutates the store and returns a fresh
//! [`RenderDescription`] for the host to apply.

use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::models::{AboutInfo, FilterConfig, Selection, SortOrder};
use crate::rendering::{Locale, RenderDescription, describe_view};

use super::catalog::CatalogStore;
use super::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use super::ingest::Catalog;

/// State of one gallery page.
#[derive(Debug, Clone)]
pub struct LibrarySession {
    store: CatalogStore,
    about: AboutInfo,
    locale: Locale,
    load_error: Option<String>,
    search_input: Debouncer<String>,
}

impl LibrarySession {
    /// Creates a session over a loaded catalog.
    #[must_use]
    pub fn new(catalog: Catalog, locale: Locale) -> Self {
        Self {
            store: CatalogStore::new(catalog),
            about: AboutInfo::default(),
            locale,
            load_error: None,
            search_input: Debouncer::new(DEFAULT_DEBOUNCE),
        }
    }

    /// Creates a session whose catalog failed to load.
    ///
    /// The catalog is empty and every render carries `message` as its error.
    /// All interactions keep working.
    #[must_use]
    pub fn failed(message: impl Into<String>, locale: Locale) -> Self {
        let mut session = Self::new(Catalog::default(), locale);
        session.load_error = Some(message.into());
        session
    }

    /// Attaches the about document.
    #[must_use]
    pub fn with_about(mut self, about: AboutInfo) -> Self {
        self.about = about;
        self
    }

    /// Sets the search debounce window. Zero applies input immediately.
    #[must_use]
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.search_input = Debouncer::new(window);
        self
    }

    /// Returns the catalog store.
    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Returns the current filter configuration.
    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        self.store.config()
    }

    /// Returns the about document.
    #[must_use]
    pub const fn about(&self) -> &AboutInfo {
        &self.about
    }

    /// Returns the display language.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the catalog load error, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Describes the current state.
    #[must_use]
    pub fn render(&self) -> RenderDescription {
        let catalog = self.store.catalog();
        let visible = self.store.visible();
        let mut view = describe_view(
            catalog.records(),
            &visible,
            self.store.config(),
            catalog.tags(),
            self.locale,
        );
        view.error.clone_from(&self.load_error);
        view
    }

    /// Replaces the whole filter configuration and re-renders.
    pub fn apply_config(&mut self, config: FilterConfig) -> RenderDescription {
        self.search_input.cancel();
        self.store.set_config(config);
        self.render()
    }

    /// Selects a collection and re-renders.
    pub fn set_collection(&mut self, collection: impl Into<Selection>) -> RenderDescription {
        self.store.set_collection(collection);
        self.render()
    }

    /// Selects a blockchain and re-renders.
    pub fn set_blockchain(&mut self, blockchain: impl Into<Selection>) -> RenderDescription {
        self.store.set_blockchain(blockchain);
        self.render()
    }

    /// Toggles a tag and re-renders.
    pub fn toggle_tag(&mut self, tag: &str) -> RenderDescription {
        let active = self.store.toggle_tag(tag);
        debug!(tag, active, "tag toggled");
        self.render()
    }

    /// Applies a search term immediately and re-renders.
    ///
    /// Any pending debounced input is dropped.
    pub fn set_search(&mut self, search: &str) -> RenderDescription {
        self.search_input.cancel();
        self.store.set_search(search);
        self.render()
    }

    /// Clears the search term and re-renders.
    pub fn clear_search(&mut self) -> RenderDescription {
        self.search_input.cancel();
        self.store.clear_search();
        self.render()
    }

    /// Sets the sort order and re-renders.
    pub fn set_sort(&mut self, sort: SortOrder) -> RenderDescription {
        self.store.set_sort(sort);
        self.render()
    }

    /// Restores the default configuration and re-renders.
    #[instrument(skip(self))]
    pub fn reset_filters(&mut self) -> RenderDescription {
        self.search_input.cancel();
        self.store.reset_filters();
        self.render()
    }

    /// Records a keystroke in the search box at `now`.
    ///
    /// Nothing is recomputed until [`LibrarySession::poll_search_at`] finds
    /// the input quiet for the debounce window.
    pub fn input_search_at(&mut self, text: &str, now: Instant) {
        self.search_input.push_at(text.to_string(), now);
    }

    /// Applies pending search input if the debounce window has elapsed.
    ///
    /// Returns the new render description when a search was applied.
    pub fn poll_search_at(&mut self, now: Instant) -> Option<RenderDescription> {
        let text = self.search_input.poll_at(now)?;
        self.store.set_search(&text);
        Some(self.render())
    }

    /// Time until pending search input is applied, if any is pending.
    #[must_use]
    pub fn search_pending_for(&self, now: Instant) -> Option<Duration> {
        self.search_input.time_until_ready(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn session() -> LibrarySession {
        LibrarySession::new(
            Catalog::from_records([
                Record::new("Aube")
                    .with_collection("M-Vox")
                    .with_blockchain("Ethereum")
                    .with_tags(["rare"])
                    .with_date("2024-01-01"),
                Record::new("Brume")
                    .with_collection("M-Numeris")
                    .with_blockchain("Polygon")
                    .with_date("2024-02-01"),
            ]),
            Locale::Fr,
        )
    }

    #[test]
    fn test_interactions_return_fresh_views() {
        let mut session = session();

        let view = session.set_collection("M-Vox");
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.result_count.message, "1 sur 2 NFTs");

        let view = session.set_blockchain("Polygon");
        assert!(view.empty);

        let view = session.reset_filters();
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.result_count.message, "2 NFTs dans la bibliothèque");
        assert!(session.config().is_default());
    }

    #[test]
    fn test_apply_config() {
        let mut session = session();
        let view = session.apply_config(
            FilterConfig::new()
                .with_tag("rare")
                .with_sort(SortOrder::Oldest),
        );
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].title.as_str(), "Aube");
        assert!(view.tag_buttons[0].active);
    }

    #[test]
    fn test_debounced_search() {
        let start = Instant::now();
        let ms = Duration::from_millis(1);
        let mut session = session().with_debounce(200 * ms);

        session.input_search_at("b", start);
        session.input_search_at("br", start + 50 * ms);
        assert!(session.poll_search_at(start + 100 * ms).is_none());
        assert_eq!(session.config().search, "");

        let view = session.poll_search_at(start + 250 * ms).unwrap();
        assert_eq!(session.config().search, "br");
        assert_eq!(view.cards.len(), 1);
        assert!(session.search_pending_for(start + 300 * ms).is_none());
    }

    #[test]
    fn test_reset_drops_pending_input() {
        let start = Instant::now();
        let mut session = session();
        session.input_search_at("aube", start);
        session.reset_filters();
        assert!(session.poll_search_at(start + Duration::from_secs(1)).is_none());
        assert!(session.config().is_default());
    }

    #[test]
    fn test_failed_session_reports_error() {
        let mut session = LibrarySession::failed("catalog unavailable", Locale::En);
        let view = session.toggle_tag("rare");
        assert_eq!(view.error.as_deref(), Some("catalog unavailable"));
        assert!(view.empty);
        assert_eq!(view.stats.total, 0);
        assert_eq!(session.load_error(), Some("catalog unavailable"));
    }
}
