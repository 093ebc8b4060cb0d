//! Filter query parser for the catalog.
//!
//! Parses GitHub-style filter syntax like:
//! - `collection:M-Vox` - Select a collection (`col:` also accepted)
//! - `chain:Polygon` - Select a blockchain (`blockchain:` also accepted)
//! - `tag:rare` - Require a tag (AND with other tags)
//! - `tag:rare,gen1` - Require several tags at once
//! - `sort:oldest` - Sort order
//! - anything else - Free-text search words

use crate::models::{FilterConfig, Selection, SortOrder};

/// Parses a filter query string into a `FilterConfig`.
///
/// Keys are case-insensitive; values keep their case. Unknown sort orders
/// are ignored. Words without a known key are joined with single spaces into
/// the search term.
///
/// # Examples
///
/// ```
/// use nftlib::parse_filter_query;
/// use nftlib::models::SortOrder;
///
/// let config = parse_filter_query("chain:Polygon tag:rare sort:oldest aube");
/// assert_eq!(config.blockchain.value(), Some("Polygon"));
/// assert_eq!(config.tags, vec!["rare"]);
/// assert_eq!(config.sort, SortOrder::Oldest);
/// assert_eq!(config.search, "aube");
/// ```
#[must_use]
pub fn parse_filter_query(query: &str) -> FilterConfig {
    let mut config = FilterConfig::new();
    let mut words: Vec<&str> = Vec::new();

    for token in query.split_whitespace() {
        if !parse_token(token, &mut config) {
            words.push(token);
        }
    }

    config.search = words.join(" ");
    config
}

/// Parses a single `key:value` token. Returns false if it is a search word.
fn parse_token(token: &str, config: &mut FilterConfig) -> bool {
    let Some((key, value)) = token.split_once(':') else {
        return false;
    };

    match key.to_lowercase().as_str() {
        "collection" | "col" => {
            config.collection = Selection::parse(value);
        },
        "chain" | "blockchain" => {
            config.blockchain = Selection::parse(value);
        },
        "tag" | "tags" => parse_tag_value(value, config),
        "sort" => {
            if let Some(sort) = SortOrder::parse(value) {
                config.sort = sort;
            }
        },
        // A colon inside a plain word ("12:30") is still a search word.
        _ => return false,
    }
    true
}

/// Adds every comma-separated tag to the required set.
fn parse_tag_value(value: &str, config: &mut FilterConfig) {
    for tag in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !config.is_tag_active(tag) {
            config.tags.push(tag.to_string());
        }
    }
}
