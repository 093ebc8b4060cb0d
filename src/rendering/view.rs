//! Render descriptions.
//!
//! [`describe_view`] is a pure function from the catalog and its visible
//! subset to a [`RenderDescription`]: plain data that a host turns into UI.
//! Every piece of record text in the description is HTML-escaped.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{FilterConfig, Record};

use super::escape::{Escaped, safe_url};
use super::locale::Locale;

/// Everything a host needs to draw the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderDescription {
    /// Totals over the full catalog.
    pub stats: Stats,
    /// One button per known tag.
    pub tag_buttons: Vec<TagButton>,
    /// False when the catalog has no tags and the tag filter should be hidden.
    pub show_tag_filter: bool,
    /// One card per visible record, in display order.
    pub cards: Vec<Card>,
    /// Result-count line.
    pub result_count: ResultCount,
    /// True iff no record is visible.
    pub empty: bool,
    /// Display-level error (catalog failed to load).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Catalog totals. Filtering never changes these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of published records.
    pub total: usize,
    /// Records per collection.
    pub by_collection: BTreeMap<String, usize>,
    /// Records per blockchain.
    pub by_blockchain: BTreeMap<String, usize>,
}

impl Stats {
    /// Computes totals over a set of records.
    #[must_use]
    pub fn compute(records: &[Record]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            *stats
                .by_collection
                .entry(record.collection.clone())
                .or_default() += 1;
            *stats
                .by_blockchain
                .entry(record.blockchain.clone())
                .or_default() += 1;
        }
        stats
    }

    /// Records in a collection, zero if unknown.
    #[must_use]
    pub fn collection(&self, name: &str) -> usize {
        self.by_collection.get(name).copied().unwrap_or(0)
    }

    /// Records on a blockchain, zero if unknown.
    #[must_use]
    pub fn blockchain(&self, name: &str) -> usize {
        self.by_blockchain.get(name).copied().unwrap_or(0)
    }
}

/// A tag filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagButton {
    /// Escaped label.
    pub label: Escaped,
    /// Raw tag to pass back to `toggle_tag`. Never interpolate into markup.
    pub tag: String,
    /// Whether the tag is currently required.
    pub active: bool,
}

/// A visible record, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Title; also the image alt text.
    pub title: Escaped,
    /// Collection badge.
    pub collection: Escaped,
    /// Blockchain badge.
    pub blockchain: Escaped,
    /// Short description.
    pub description: Escaped,
    /// Tag chips.
    pub tags: Vec<Escaped>,
    /// Formatted date.
    pub date: Escaped,
    /// Image reference; empty when the record has none or it is not a safe URL.
    pub image: Escaped,
    /// Document download, when the record has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<DownloadAction>,
    /// Marketplace link, when the record has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opensea_url: Option<Escaped>,
}

/// Anchor navigation the host performs when the card image is activated.
///
/// The document is neither fetched nor parsed by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadAction {
    /// Document reference.
    pub href: Escaped,
    /// Suggested title for the download.
    pub title: Escaped,
}

/// The result-count line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCount {
    /// Visible records.
    pub shown: usize,
    /// Published records.
    pub total: usize,
    /// Localised message built from the two counts.
    pub message: String,
}

impl ResultCount {
    /// Returns true if some records are hidden by the filters.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.shown != self.total
    }
}

impl Card {
    /// Builds the card of a record.
    ///
    /// Resource references with a scheme other than `http`/`https` are dropped.
    #[must_use]
    pub fn from_record(record: &Record, locale: Locale) -> Self {
        let title = Escaped::new(&record.title);
        Self {
            collection: Escaped::new(&record.collection),
            blockchain: Escaped::new(&record.blockchain),
            description: Escaped::new(&record.description_short),
            tags: record.tags.iter().map(|t| Escaped::new(t)).collect(),
            date: Escaped::new(&locale.format_date(&record.date)),
            image: safe_url(&record.image).unwrap_or_default(),
            download: record
                .pdf
                .as_deref()
                .and_then(safe_url)
                .map(|href| DownloadAction {
                    href,
                    title: title.clone(),
                }),
            opensea_url: record.opensea_url.as_deref().and_then(safe_url),
            title,
        }
    }
}

/// Describes the gallery for the given catalog state.
///
/// `records` is the full catalog, `visible` the filtered and sorted subset.
/// Stats are computed over `records`; the visible subset only drives the
/// cards, the result count and the empty flag.
#[must_use]
pub fn describe_view(
    records: &[Record],
    visible: &[&Record],
    config: &FilterConfig,
    all_tags: &[String],
    locale: Locale,
) -> RenderDescription {
    let tag_buttons = all_tags
        .iter()
        .map(|tag| TagButton {
            label: Escaped::new(tag),
            tag: tag.clone(),
            active: config.is_tag_active(tag),
        })
        .collect();

    let cards = visible
        .iter()
        .map(|record| Card::from_record(record, locale))
        .collect();

    let result_count = ResultCount {
        shown: visible.len(),
        total: records.len(),
        message: locale.result_message(visible.len(), records.len()),
    };

    RenderDescription {
        stats: Stats::compute(records),
        tag_buttons,
        show_tag_filter: !all_tags.is_empty(),
        cards,
        result_count,
        empty: visible.is_empty(),
        error: None,
    }
}
