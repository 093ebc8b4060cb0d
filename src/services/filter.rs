//! Filter pipeline.
//!
//! [`apply_filters`] is pure: the same records and configuration always
//! produce the same ordered result. Filters compose by conjunction and the
//! sort runs last.

use crate::models::{FilterConfig, Record};

use super::sort::sort_by_order;

/// Applies every filter in `config`, then sorts.
#[must_use]
pub fn apply_filters<'a>(records: &'a [Record], config: &FilterConfig) -> Vec<&'a Record> {
    visible_indices(records, config)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Same as [`apply_filters`], returning positions into `records`.
#[must_use]
pub fn visible_indices(records: &[Record], config: &FilterConfig) -> Vec<usize> {
    let term = config.search.to_lowercase();

    let mut entries: Vec<(usize, &Record)> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| passes(r, config, &term))
        .collect();

    sort_by_order(&mut entries, config.sort, |entry| entry.1);
    entries.into_iter().map(|(i, _)| i).collect()
}

fn passes(record: &Record, config: &FilterConfig, term: &str) -> bool {
    config.collection.matches(&record.collection)
        && config.blockchain.matches(&record.blockchain)
        && has_all_tags(record, &config.tags)
        && matches_search(record, term)
}

/// Returns true if the record carries every required tag.
///
/// An empty requirement matches every record, including untagged ones.
#[must_use]
pub fn has_all_tags(record: &Record, required: &[String]) -> bool {
    required.iter().all(|tag| record.has_tag(tag))
}

/// Returns true if the lowercased term occurs in any searchable field.
///
/// `term` must already be lowercase. An empty term matches everything.
#[must_use]
pub fn matches_search(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let contains = |field: &str| field.to_lowercase().contains(term);

    contains(&record.title)
        || contains(&record.description_short)
        || contains(&record.description_full)
        || contains(&record.collection)
        || contains(&record.blockchain)
        || record.tags.iter().any(|tag| contains(tag))
}
