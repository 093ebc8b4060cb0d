//! Sort comparators for the visible subset.
//!
//! Date order: parsed dates compare chronologically. Records whose date does
//! not parse (including missing dates) count as older than every parsed date
//! and are ordered among themselves by their raw text. `Newest` is the exact
//! reverse of `Oldest`; records with equal keys keep their catalog order in
//! both because the sort is stable.
//!
//! Title order approximates French collation: accents and case only break
//! ties between titles that are otherwise equal.

use std::cmp::{Ordering, Reverse};

use chrono::NaiveDateTime;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::{Record, SortOrder};

/// Chronological sort key of a record.
///
/// Variant order matters: every `Unparsed` key sorts before every `Parsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DateKey<'a> {
    Unparsed(&'a str),
    Parsed(NaiveDateTime),
}

impl<'a> DateKey<'a> {
    fn of(record: &'a Record) -> Self {
        record
            .date
            .parsed()
            .map_or_else(|| Self::Unparsed(record.date.raw()), Self::Parsed)
    }
}

/// Collation key of a title.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TitleKey {
    /// Base letters, lowercased, without accents.
    primary: String,
    /// Lowercased with accents.
    secondary: String,
    /// Original text.
    tertiary: String,
}

impl TitleKey {
    /// Builds the collation key of a title.
    #[must_use]
    pub fn new(title: &str) -> Self {
        let secondary: String = title.nfd().flat_map(char::to_lowercase).collect();
        let primary = secondary.chars().filter(|c| !is_combining_mark(*c)).collect();
        Self {
            primary,
            secondary,
            tertiary: title.to_string(),
        }
    }
}

/// Compares two titles the way the gallery sorts them.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TitleKey::new(a).cmp(&TitleKey::new(b))
}

/// Compares two records by date, oldest first.
#[must_use]
pub fn compare_dates(a: &Record, b: &Record) -> Ordering {
    DateKey::of(a).cmp(&DateKey::of(b))
}

/// Sorts records in place. The sort is stable.
pub fn sort_records(records: &mut [&Record], order: SortOrder) {
    sort_by_order(records, order, |r| *r);
}

/// Sorts arbitrary items by the record each one refers to. The sort is stable.
pub fn sort_by_order<T>(items: &mut [T], order: SortOrder, record_of: impl Fn(&T) -> &Record) {
    match order {
        SortOrder::Newest => items.sort_by(|a, b| compare_dates(record_of(b), record_of(a))),
        SortOrder::Oldest => items.sort_by(|a, b| compare_dates(record_of(a), record_of(b))),
        SortOrder::AlphaAsc => items.sort_by_cached_key(|x| TitleKey::new(&record_of(x).title)),
        SortOrder::AlphaDesc => {
            items.sort_by_cached_key(|x| Reverse(TitleKey::new(&record_of(x).title)));
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_newest_and_oldest() {
        let a = Record::new("a").with_date("2024-01-01");
        let b = Record::new("b").with_date("2024-06-01");
        let c = Record::new("c").with_date("2023-12-31");

        let mut records = vec![&a, &b, &c];
        sort_records(&mut records, SortOrder::Newest);
        assert_eq!(titles(&records), ["b", "a", "c"]);

        sort_records(&mut records, SortOrder::Oldest);
        assert_eq!(titles(&records), ["c", "a", "b"]);
    }

    #[test]
    fn test_unparsable_dates_are_oldest() {
        let valid = Record::new("valid").with_date("2020-01-01");
        let soon = Record::new("soon").with_date("soon");
        let missing = Record::new("missing");
        let later = Record::new("later").with_date("later");

        let mut records = vec![&valid, &soon, &missing, &later];
        sort_records(&mut records, SortOrder::Oldest);
        // "" < "later" < "soon", all before any parsed date.
        assert_eq!(titles(&records), ["missing", "later", "soon", "valid"]);

        sort_records(&mut records, SortOrder::Newest);
        assert_eq!(titles(&records), ["valid", "soon", "later", "missing"]);
    }

    #[test]
    fn test_equal_dates_keep_input_order_both_ways() {
        let a = Record::new("a").with_date("2024-01-01");
        let b = Record::new("b").with_date("2024-01-01");
        let c = Record::new("c").with_date("2024-01-01");

        let mut newest = vec![&a, &b, &c];
        sort_records(&mut newest, SortOrder::Newest);
        assert_eq!(titles(&newest), ["a", "b", "c"]);

        let mut oldest = vec![&a, &b, &c];
        sort_records(&mut oldest, SortOrder::Oldest);
        assert_eq!(titles(&oldest), ["a", "b", "c"]);
    }

    #[test]
    fn test_alpha_ignores_case_and_accents_first() {
        let e = Record::new("école");
        let z = Record::new("Zèbre");
        let a = Record::new("arbre");
        let missing = Record::default();

        let mut records = vec![&e, &z, &a, &missing];
        sort_records(&mut records, SortOrder::AlphaAsc);
        assert_eq!(titles(&records), ["", "arbre", "école", "Zèbre"]);

        sort_records(&mut records, SortOrder::AlphaDesc);
        assert_eq!(titles(&records), ["Zèbre", "école", "arbre", ""]);
    }

    #[test]
    fn test_compare_titles_accent_breaks_ties() {
        assert_eq!(compare_titles("cote", "côte"), Ordering::Less);
        assert_eq!(compare_titles("Côte", "cote"), Ordering::Greater);
        assert_eq!(compare_titles("côte", "cotes"), Ordering::Less);
        assert_eq!(compare_titles("same", "same"), Ordering::Equal);
    }
}
